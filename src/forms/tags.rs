use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::tag::{
    NewTag, TAG_STATE_DISABLED, TAG_STATE_ENABLED, TAG_TEXT_MAX_BYTES, TagFilter, TagListQuery,
    UpdateTag,
};
use crate::forms::rules::{self, Rule};
use crate::pagination::resolve_page;

/// Result type returned by the tag form helpers.
pub type TagFormResult<T> = Result<T, TagFormError>;

/// Errors that can occur while processing tag forms.
#[derive(Debug, Error)]
pub enum TagFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Treats a missing or blank parameter as not supplied.
fn supplied(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

/// Parses an optional `state` parameter, which must be 0 or 1 when present.
fn parse_state(raw: Option<&str>) -> (Option<i32>, Rule) {
    match supplied(raw) {
        None => (None, None),
        Some(raw) => match rules::integer("state", raw) {
            Ok(state) => (
                Some(state),
                rules::range("state", state, TAG_STATE_DISABLED, TAG_STATE_ENABLED),
            ),
            Err(violation) => (None, Some(violation)),
        },
    }
}

/// Parses a path identifier, which must be a positive integer.
fn parse_id(raw: &str) -> (i32, Rule) {
    match rules::integer("id", raw) {
        Ok(id) => (id, rules::min("id", id, 1)),
        Err(violation) => (0, Some(violation)),
    }
}

fn text_rules(field: &'static str, value: &str, required: bool) -> [Rule; 2] {
    let value = value.trim();
    [
        required.then(|| rules::required(field, value)).flatten(),
        rules::max_size(field, value, TAG_TEXT_MAX_BYTES),
    ]
}

/// Query parameters accepted by the tag list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListTagsForm {
    /// Exact name filter; blank means no filter.
    pub name: Option<String>,
    /// State filter; blank means no filter.
    pub state: Option<String>,
    /// 1-based page number.
    pub page: Option<String>,
}

/// `state` value clients send to ask for every state.
const ANY_STATE: i32 = -1;

/// State filter of a list request. Unparsable values and [`ANY_STATE`] do not
/// filter.
fn list_state_filter(raw: Option<&str>) -> Option<i32> {
    supplied(raw)
        .and_then(|raw| raw.parse::<i32>().ok())
        .filter(|state| *state != ANY_STATE)
}

impl ListTagsForm {
    /// Builds a paginated list query holding only the filters actually supplied.
    pub fn into_list_query(self, per_page: usize) -> TagListQuery {
        let mut filter = TagFilter::new();
        if let Some(name) = supplied(self.name.as_deref()) {
            filter = filter.name(name);
        }
        if let Some(state) = list_state_filter(self.state.as_deref()) {
            filter = filter.state(state);
        }

        let page = resolve_page(self.page.as_deref());

        TagListQuery::new(filter).paginate(page, per_page)
    }
}

/// Query parameters accepted when creating a tag.
#[derive(Debug, Default, Deserialize)]
pub struct AddTagForm {
    #[serde(default)]
    pub name: String,
    /// Defaults to 0 when absent.
    pub state: Option<String>,
    #[serde(default)]
    pub created_by: String,
}

impl Validate for AddTagForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let (_, state_rule) = parse_state(self.state.as_deref());

        rules::check(
            text_rules("name", &self.name, true)
                .into_iter()
                .chain(text_rules("created_by", &self.created_by, true))
                .chain([state_rule]),
        )
    }
}

impl AddTagForm {
    /// Validates and sanitizes the payload into a domain `NewTag`.
    pub fn into_new_tag(self) -> TagFormResult<NewTag> {
        self.validate()?;

        let (state, _) = parse_state(self.state.as_deref());

        Ok(NewTag::new(
            self.name,
            state.unwrap_or(TAG_STATE_DISABLED),
            self.created_by,
        ))
    }
}

/// Parameters accepted when editing a tag. `id` comes from the path.
#[derive(Debug, Default, Deserialize)]
pub struct EditTagForm {
    #[serde(skip)]
    pub id: String,
    /// New name; blank leaves the name unchanged.
    pub name: Option<String>,
    /// New state; blank leaves the state unchanged.
    pub state: Option<String>,
    #[serde(default)]
    pub modified_by: String,
}

impl Validate for EditTagForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let (_, id_rule) = parse_id(&self.id);
        let (_, state_rule) = parse_state(self.state.as_deref());
        let name = self.name.as_deref().unwrap_or_default();

        rules::check(
            [id_rule, state_rule]
                .into_iter()
                .chain(text_rules("modified_by", &self.modified_by, true))
                .chain(text_rules("name", name, false)),
        )
    }
}

impl EditTagForm {
    /// Validates the payload into the target id and a merge-patch.
    pub fn into_update_tag(self) -> TagFormResult<(i32, UpdateTag)> {
        self.validate()?;

        let (id, _) = parse_id(&self.id);
        let (state, _) = parse_state(self.state.as_deref());

        let mut update = UpdateTag::new(self.modified_by);
        if let Some(name) = supplied(self.name.as_deref()) {
            update = update.name(name);
        }
        if let Some(state) = state {
            update = update.state(state);
        }

        Ok((id, update))
    }
}

/// Path parameter accepted when deleting a tag.
#[derive(Debug, Default)]
pub struct DeleteTagForm {
    pub id: String,
}

impl Validate for DeleteTagForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let (_, id_rule) = parse_id(&self.id);
        rules::check([id_rule])
    }
}

impl DeleteTagForm {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn into_tag_id(self) -> TagFormResult<i32> {
        self.validate()?;
        let (id, _) = parse_id(&self.id);
        Ok(id)
    }
}
