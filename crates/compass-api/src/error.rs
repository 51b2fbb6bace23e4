//! Error types for API generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading records or writing the API tree.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Record set not found.
    #[error("record set not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Record set is not a JSON array of controls.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize an endpoint payload.
    #[error("failed to serialize {path}: {source}")]
    JsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to create an output directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an endpoint file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for API generation.
pub type Result<T> = std::result::Result<T, ApiError>;
