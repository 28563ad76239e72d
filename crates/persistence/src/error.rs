//! # Persistence Errors
//!
//! Error types for the persistence layer, wrapping sqlx errors.

use proeventos_core::CoreError;
use thiserror::Error;

/// Persistence layer errors
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type alias for PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

impl From<PersistenceError> for CoreError {
    fn from(err: PersistenceError) -> Self {
        CoreError::storage(err.to_string())
    }
}
