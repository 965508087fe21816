//! Error types for durable storage.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur when reading or writing the stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A profile already exists for this user key.
    #[error("already registered: {0}")]
    AlreadyRegistered(String),

    /// No profile exists for this user key.
    #[error("no profile for user: {0}")]
    NotFound(String),

    /// The underlying file could not be read or written.
    #[error("storage unavailable: {0}")]
    Io(#[from] std::io::Error),

    /// A stored collection could not be encoded or decoded.
    #[error("corrupt store: {0}")]
    Codec(#[from] serde_json::Error),
}
