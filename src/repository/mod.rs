use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

use crate::db::{DbConnection, DbPool};
use crate::domain::tag::{NewTag, Tag, TagFilter, TagListQuery, UpdateTag};

pub mod tag;

#[cfg(test)]
pub mod mock;

/// Errors raised by the persistence layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The targeted record does not exist.
    #[error("record not found")]
    NotFound,
    /// A uniqueness constraint rejected the write.
    #[error("record already exists")]
    Conflict,
    #[error("database error: {0}")]
    Database(DieselError),
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),
}

impl From<DieselError> for RepositoryError {
    fn from(value: DieselError) -> Self {
        match value {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                RepositoryError::Conflict
            }
            other => RepositoryError::Database(other),
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over live (not soft-deleted) tags.
pub trait TagReader {
    fn list_tags(&self, query: &TagListQuery) -> RepositoryResult<Vec<Tag>>;
    fn count_tags(&self, filter: &TagFilter) -> RepositoryResult<usize>;
    fn tag_exists_by_name(&self, name: &str) -> RepositoryResult<bool>;
    fn tag_exists_by_id(&self, id: i32) -> RepositoryResult<bool>;
}

/// Write operations over tags. Timestamps are owned by the implementation.
pub trait TagWriter {
    fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
    fn update_tag(&self, tag_id: i32, updates: &UpdateTag) -> RepositoryResult<Tag>;
    fn delete_tag(&self, tag_id: i32) -> RepositoryResult<()>;
}
