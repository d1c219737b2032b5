//! Error types for docstream.
//!
//! This crate provides:
//! - [`DsError`] - Top-level error enum for all ingestion errors
//! - Domain-specific errors ([`StorageError`], [`LoaderError`])
//! - A [`Result`] alias used throughout the workspace
//!
//! Errors originate in the storage backend or the directory loader and
//! propagate to the caller unmodified; no layer retries or translates them.

use thiserror::Error;

/// Top-level error type for docstream.
#[derive(Error, Debug)]
pub enum DsError {
    /// Storage errors (object access, listing, directory markers)
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Loader errors (traversal, parsing, document construction)
    #[error("Loader error: {0}")]
    Loader(#[from] LoaderError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors (wrapped anyhow)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Storage-related errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Object or directory not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Credentials rejected or access denied by the endpoint
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// Directory already exists and `exist_ok` was false
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Malformed endpoint URL or object path
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Request to the storage backend failed
    #[error("Request failed: {0}")]
    Request(String),

    /// I/O error while reading an object body
    #[error("I/O error: {0}")]
    Io(String),
}

/// Loader-related errors.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// No parser registered for the file extension
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// File content could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// File has no usable extension
    #[error("Missing extension: {0}")]
    MissingExtension(String),

    /// I/O error while fetching file bytes
    #[error("I/O error: {0}")]
    Io(String),
}

impl DsError {
    /// True when the error means the requested object does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DsError::Storage(StorageError::NotFound(_)))
    }

    /// True when the error means a directory already exists.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, DsError::Storage(StorageError::AlreadyExists(_)))
    }
}

/// Result type alias using DsError.
pub type Result<T> = std::result::Result<T, DsError>;
