//! Error types for the core library

use thiserror::Error;

/// Errors raised by the service and store layers.
///
/// Absence is not an error here: lookups that find nothing return `Ok(None)`.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CoreError {
    /// Build a storage error from anything printable
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}

/// Result alias over CoreError
pub type Result<T> = std::result::Result<T, CoreError>;
