//! Wishes wall error types
//!
//! None of these ever reach the page: the board logs and swallows them so the
//! in-memory list stays authoritative.

use thiserror::Error;

/// Errors that can occur while mirroring the wish list
#[derive(Error, Debug)]
pub enum WishError {
    /// I/O operation failed (file-backed store)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization of the persisted record failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The backing store rejected the read or write (quota, privacy mode, ...)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for WishError {
    fn from(err: serde_json::Error) -> Self {
        WishError::Serialization(err.to_string())
    }
}

/// Result type alias for wish storage operations
pub type WishResult<T> = Result<T, WishError>;
