//! Domain-level error types.

use thiserror::Error;

use crate::ports::AuthError;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: i64 },

    #[error("Incorrect password")]
    IncorrectPassword,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn post_not_found(id: i64) -> Self {
        DomainError::NotFound {
            entity_type: "Post",
            id,
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

// A bare repository NotFound has no id to report; the service maps the
// id-carrying cases itself before falling back to this conversion.
impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        DomainError::Internal(err.to_string())
    }
}

impl From<AuthError> for DomainError {
    fn from(err: AuthError) -> Self {
        DomainError::Internal(err.to_string())
    }
}
