use crate::domain::tag::TagFilter;
use crate::repository::TagReader;
use crate::services::{ServiceError, ServiceResult};

/// Confirms the persistence layer answers a trivial query.
pub fn check_database<R>(repo: &R) -> ServiceResult<()>
where
    R: TagReader + ?Sized,
{
    repo.count_tags(&TagFilter::new())
        .map(|_| ())
        .map_err(ServiceError::Repository)
}
