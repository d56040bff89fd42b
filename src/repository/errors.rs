use diesel::r2d2::{Error as R2D2Error, PoolError};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("member or team not found")]
    NotFound,

    /// The backing store could not serve the request (connectivity, timeout,
    /// pool exhaustion or a generic database failure).
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

fn database_error(kind: DatabaseErrorKind, message: String) -> RepositoryError {
    let constraint = match kind {
        DatabaseErrorKind::UniqueViolation => "unique",
        DatabaseErrorKind::ForeignKeyViolation => "foreign key",
        DatabaseErrorKind::NotNullViolation => "not null",
        DatabaseErrorKind::CheckViolation => "check",
        // Busy database or lost connection.
        _ => return RepositoryError::StorageUnavailable(message),
    };
    RepositoryError::ConstraintViolation(format!("{constraint} constraint failed: {message}"))
}

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(kind, info) => database_error(kind, info.message().to_string()),
            DieselError::InvalidCString(_)
            | DieselError::SerializationError(_)
            | DieselError::DeserializationError(_)
            | DieselError::QueryBuilderError(_) => RepositoryError::ValidationError(err.to_string()),
            DieselError::RollbackTransaction | DieselError::BrokenTransactionManager => {
                RepositoryError::StorageUnavailable(err.to_string())
            }
            _ => RepositoryError::Unexpected(err.to_string()),
        }
    }
}

impl From<R2D2Error> for RepositoryError {
    fn from(err: R2D2Error) -> Self {
        RepositoryError::StorageUnavailable(format!("Connection error: {err}"))
    }
}

impl From<PoolError> for RepositoryError {
    fn from(err: PoolError) -> Self {
        RepositoryError::StorageUnavailable(format!("Connection error: {err}"))
    }
}
