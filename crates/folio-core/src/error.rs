//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Content repository violates one of its invariants
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    /// Persisted state could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;
