//! Error conversion glue between layers.
//!
//! The domain layer must not depend on repository, service or form error
//! types, so the conversions from [`TypeConstraintError`] live here.

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::repository::errors::RepositoryError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

impl From<TypeConstraintError> for FormError {
    fn from(val: TypeConstraintError) -> Self {
        FormError::InvalidValue(val.to_string())
    }
}
