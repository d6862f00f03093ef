use chrono::Utc;
use diesel::dsl::{exists, select};
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::tag::{
    NewTag as DomainNewTag, Tag as DomainTag, TagFilter, TagListQuery,
    UpdateTag as DomainUpdateTag,
};
use crate::models::tag::{NewTag as DbNewTag, Tag as DbTag, UpdateTag as DbUpdateTag};
use crate::repository::{DieselRepository, RepositoryError, RepositoryResult, TagReader, TagWriter};
use crate::schema::tags;

/// Live tags matching every key present in `filter`.
fn filtered(filter: &TagFilter) -> tags::BoxedQuery<'_, Sqlite> {
    let mut query = tags::table.filter(tags::deleted_on.eq(0)).into_boxed();

    if let Some(name) = filter.name.as_deref() {
        query = query.filter(tags::name.eq(name));
    }
    if let Some(state) = filter.state {
        query = query.filter(tags::state.eq(state));
    }

    query
}

fn now() -> i64 {
    Utc::now().timestamp()
}

impl TagReader for DieselRepository {
    fn list_tags(&self, query: &TagListQuery) -> RepositoryResult<Vec<DomainTag>> {
        let mut conn = self.conn()?;

        let mut items_query = filtered(&query.filter).order(tags::id.asc());

        if let Some(pagination) = &query.pagination {
            // Values beyond i64 still select past the last row.
            let offset = i64::try_from(pagination.offset()).unwrap_or(i64::MAX);
            let limit = i64::try_from(pagination.per_page).unwrap_or(i64::MAX);
            items_query = items_query.offset(offset).limit(limit);
        }

        let db_tags = items_query.load::<DbTag>(&mut conn)?;

        Ok(db_tags.into_iter().map(DomainTag::from).collect())
    }

    fn count_tags(&self, filter: &TagFilter) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;

        let total = filtered(filter).count().get_result::<i64>(&mut conn)?;

        Ok(total as usize)
    }

    fn tag_exists_by_name(&self, name: &str) -> RepositoryResult<bool> {
        let mut conn = self.conn()?;

        let found = select(exists(
            tags::table
                .filter(tags::name.eq(name))
                .filter(tags::deleted_on.eq(0)),
        ))
        .get_result::<bool>(&mut conn)?;

        Ok(found)
    }

    fn tag_exists_by_id(&self, id: i32) -> RepositoryResult<bool> {
        let mut conn = self.conn()?;

        let found = select(exists(
            tags::table
                .filter(tags::id.eq(id))
                .filter(tags::deleted_on.eq(0)),
        ))
        .get_result::<bool>(&mut conn)?;

        Ok(found)
    }
}

impl TagWriter for DieselRepository {
    fn create_tag(&self, new_tag: &DomainNewTag) -> RepositoryResult<DomainTag> {
        let mut conn = self.conn()?;
        let insertable = DbNewTag::from_domain(new_tag, now());

        let created = diesel::insert_into(tags::table)
            .values(&insertable)
            .get_result::<DbTag>(&mut conn)?;

        Ok(created.into())
    }

    fn update_tag(&self, tag_id: i32, updates: &DomainUpdateTag) -> RepositoryResult<DomainTag> {
        let mut conn = self.conn()?;
        let db_updates = DbUpdateTag::from_domain(updates, now());

        let target = tags::table
            .filter(tags::id.eq(tag_id))
            .filter(tags::deleted_on.eq(0));

        let updated = diesel::update(target)
            .set(&db_updates)
            .get_result::<DbTag>(&mut conn)?;

        Ok(updated.into())
    }

    /// Soft delete: the row stays, stamped with `deleted_on`.
    fn delete_tag(&self, tag_id: i32) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let target = tags::table
            .filter(tags::id.eq(tag_id))
            .filter(tags::deleted_on.eq(0));

        let deleted = diesel::update(target)
            .set(tags::deleted_on.eq(now()))
            .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
