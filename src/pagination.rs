//! Page resolution shared by list endpoints.

/// Page size used when the configuration does not provide one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Page window applied to list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number.
    pub page: usize,
    /// Maximum number of items on a page.
    pub per_page: usize,
}

impl Pagination {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page,
        }
    }

    /// Number of rows skipped before the page starts. Saturates for pages far
    /// past the end instead of overflowing.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.per_page)
    }
}

/// Resolves the raw `page` query value into a 1-based page number.
///
/// Missing, blank, unparsable and non-positive values all fall back to the
/// first page.
pub fn resolve_page(raw: Option<&str>) -> usize {
    raw.map(str::trim)
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|page| *page > 0)
        .unwrap_or(1)
}
