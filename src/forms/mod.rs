//! Caller-facing input parsing and validation.

use thiserror::Error;
use validator::ValidationErrors;

pub mod member;

#[derive(Debug, Error)]
/// Errors that can occur when processing caller input.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid query string: {0}")]
    InvalidQuery(String),

    #[error("invalid value: {0}")]
    InvalidValue(String),
}
