use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Maximum size, in bytes, of a tag name and of the actor fields.
pub const TAG_TEXT_MAX_BYTES: usize = 100;
/// State of a tag that is switched off.
pub const TAG_STATE_DISABLED: i32 = 0;
/// State of a tag that is switched on.
pub const TAG_STATE_ENABLED: i32 = 1;

/// Domain representation of a taxonomy label attachable to articles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    /// Unique identifier assigned by persistence.
    pub id: i32,
    /// Human-readable name of the tag.
    pub name: String,
    /// Either [`TAG_STATE_DISABLED`] or [`TAG_STATE_ENABLED`].
    pub state: i32,
    /// Who created the tag.
    pub created_by: String,
    /// Who last edited the tag, empty until the first edit.
    pub modified_by: String,
    /// Unix seconds when the tag was created.
    pub created_on: i64,
    /// Unix seconds of the last edit, 0 until the first edit.
    pub modified_on: i64,
    /// Unix seconds of the soft delete, 0 while the tag is live.
    pub deleted_on: i64,
}

/// Payload required to insert a new tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    pub name: String,
    pub state: i32,
    pub created_by: String,
}

impl NewTag {
    /// Construct a new tag payload with trimmed text fields.
    pub fn new(name: impl Into<String>, state: i32, created_by: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            state,
            created_by: created_by.into().trim().to_string(),
        }
    }
}

/// Patch applied when editing a tag. `None` fields are left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTag {
    /// Always recorded.
    pub modified_by: String,
    pub name: Option<String>,
    pub state: Option<i32>,
}

impl UpdateTag {
    /// Start a patch that only records who edited the tag.
    pub fn new(modified_by: impl Into<String>) -> Self {
        Self {
            modified_by: modified_by.into().trim().to_string(),
            name: None,
            state: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into().trim().to_string());
        self
    }

    pub fn state(mut self, state: i32) -> Self {
        self.state = Some(state);
        self
    }
}

/// Conditions shared by the list and count queries. Only supplied keys filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    /// Exact tag name.
    pub name: Option<String>,
    /// Exact tag state.
    pub state: Option<i32>,
}

impl TagFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results to tags with exactly this `name`.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Filter the results to tags in `state`.
    pub fn state(mut self, state: i32) -> Self {
        self.state = Some(state);
        self
    }
}

/// Query definition used to list tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagListQuery {
    pub filter: TagFilter,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl TagListQuery {
    /// Construct a query that lists every tag matching `filter`.
    pub fn new(filter: TagFilter) -> Self {
        Self {
            filter,
            pagination: None,
        }
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination::new(page, per_page));
        self
    }
}
