//! Error types for the control data model.

use thiserror::Error;

/// Errors raised by model lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Standard name is not one of OWASP, ISO27001 or NIST.
    #[error("unknown standard: {name}")]
    UnknownStandard { name: String },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
