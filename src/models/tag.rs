use diesel::prelude::*;

use crate::domain::tag::{NewTag as DomainNewTag, Tag as DomainTag, UpdateTag as DomainUpdateTag};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::tags)]
pub struct Tag {
    pub id: i32,
    pub name: String,
    pub state: i32,
    pub created_by: String,
    pub modified_by: String,
    pub created_on: i64,
    pub modified_on: i64,
    pub deleted_on: i64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::tags)]
pub struct NewTag<'a> {
    pub name: &'a str,
    pub state: i32,
    pub created_by: &'a str,
    pub created_on: i64,
}

/// `None` fields are skipped by diesel, which keeps the column as stored.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::tags)]
pub struct UpdateTag<'a> {
    pub name: Option<&'a str>,
    pub state: Option<i32>,
    pub modified_by: &'a str,
    pub modified_on: i64,
}

impl From<Tag> for DomainTag {
    fn from(value: Tag) -> Self {
        Self {
            id: value.id,
            name: value.name,
            state: value.state,
            created_by: value.created_by,
            modified_by: value.modified_by,
            created_on: value.created_on,
            modified_on: value.modified_on,
            deleted_on: value.deleted_on,
        }
    }
}

impl<'a> NewTag<'a> {
    pub fn from_domain(value: &'a DomainNewTag, created_on: i64) -> Self {
        Self {
            name: value.name.as_str(),
            state: value.state,
            created_by: value.created_by.as_str(),
            created_on,
        }
    }
}

impl<'a> UpdateTag<'a> {
    pub fn from_domain(value: &'a DomainUpdateTag, modified_on: i64) -> Self {
        Self {
            name: value.name.as_deref(),
            state: value.state,
            modified_by: value.modified_by.as_str(),
            modified_on,
        }
    }
}
