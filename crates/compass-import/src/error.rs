//! Error types for control ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while importing control records.
///
/// Row-level problems never surface here: missing cells become empty
/// strings and unrecognized mapping tokens are dropped.
#[derive(Debug, Error)]
pub enum ImportError {
    // === File System Errors ===
    /// Source CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write output file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// CSV reader error (bad quoting, invalid UTF-8).
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to serialize the record set.
    #[error("failed to serialize records for {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ImportError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

/// Result type for import operations.
pub type Result<T> = std::result::Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ImportError::FileNotFound {
            path: PathBuf::from("/path/to/owasp_controls.csv"),
        };
        assert_eq!(
            err.to_string(),
            "CSV file not found: /path/to/owasp_controls.csv"
        );
    }

    #[test]
    fn test_not_found_io_maps_to_file_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ImportError::read("missing.csv", io);
        assert!(matches!(err, ImportError::FileNotFound { .. }));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ImportError::read("locked.csv", io);
        assert!(matches!(err, ImportError::FileRead { .. }));
    }
}
