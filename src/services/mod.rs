use thiserror::Error;
use validator::ValidationErrors;

use crate::forms::tags::TagFormError;
use crate::repository::RepositoryError;
use crate::response::ResponseCode;

pub mod health;
pub mod tags;

/// Terminal failure states of a request.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// One or more request fields broke a rule. Persistence was not touched.
    #[error("invalid parameters: {0}")]
    Validation(ValidationErrors),
    /// The referenced tag does not exist.
    #[error("tag not found")]
    NotFound,
    /// A tag with the same name already exists.
    #[error("tag already exists")]
    Conflict,
    #[error("persistence failure: {0}")]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Conflict => ServiceError::Conflict,
            other => ServiceError::Repository(other),
        }
    }
}

impl From<TagFormError> for ServiceError {
    fn from(value: TagFormError) -> Self {
        match value {
            TagFormError::Validation(errors) => ServiceError::Validation(errors),
        }
    }
}

impl From<&ServiceError> for ResponseCode {
    fn from(value: &ServiceError) -> Self {
        match value {
            ServiceError::Validation(_) => ResponseCode::InvalidParams,
            ServiceError::NotFound => ResponseCode::ErrorNotExistTag,
            ServiceError::Conflict => ResponseCode::ErrorExistTag,
            ServiceError::Repository(_) => ResponseCode::Error,
        }
    }
}
