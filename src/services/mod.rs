//! Use cases built on top of the repository traits.
//!
//! Services are free functions generic over the reader/writer traits they
//! need, so they run unchanged against [`crate::repository::DieselRepository`]
//! or a mock.

use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod member;
pub mod seed;
pub mod team;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,

    /// The backing store failed; callers decide whether to retry.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("form error: {0}")]
    Form(String),

    #[error("type constraint violated: {0}")]
    TypeConstraint(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::StorageUnavailable(message) => {
                ServiceError::StorageUnavailable(message)
            }
            RepositoryError::ValidationError(message) => ServiceError::TypeConstraint(message),
            RepositoryError::ConstraintViolation(message) | RepositoryError::Unexpected(message) => {
                ServiceError::Internal(message)
            }
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}
