use diesel::r2d2::PoolError;
use thiserror::Error;

/// Errors produced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("connection error: {0}")]
    Connection(#[from] PoolError),
    /// A stored row could not be turned into a domain entity.
    #[error("validation error: {0}")]
    ValidationError(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
