//! Storage error taxonomy

use thiserror::Error;

/// Failure modes of a storage backend
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage serialization failure: {0}")]
    Serde(#[from] serde_json::Error),

    /// The backend refused the write (e.g. quota exhausted)
    #[error("storage backend rejected the write: {0}")]
    Rejected(String),
}
