//! Error types for the catalog core

use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Top-level error type for catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Corrupt catalog data: {0}")]
    Data(#[from] serde_json::Error),

    #[error("No book with id {0}")]
    NotFound(u64),
}

/// Errors raised by a key-value store backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// User-input validation failures
///
/// The Display text is the user-visible message; no backend call is made
/// when one of these is raised.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Author must not be empty")]
    EmptyAuthor,

    #[error("Price must be a positive number, got {0:?}")]
    InvalidPrice(String),
}
