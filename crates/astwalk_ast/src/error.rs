//! Error types for schema loading and handler selection.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading visitor keys.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The visitor-keys document is not a valid table.
    #[error("Invalid visitor keys: {0}")]
    Invalid(String),

    /// The visitor-keys file could not be read.
    #[error("Failed to read visitor keys from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SchemaError {
    /// Creates an invalid-table error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// Errors raised by the traversal engine itself.
///
/// Errors returned by enter/exit callbacks are never wrapped in this type;
/// `traverse` hands them back to the caller unchanged.
#[derive(Debug, Error)]
pub enum TraverseError {
    /// A handler description named neither `enter`, `exit`, nor `both`.
    #[error("Invalid handler: {0}")]
    InvalidHandler(String),
}

impl TraverseError {
    /// Creates an invalid-handler error.
    pub fn invalid_handler(message: impl Into<String>) -> Self {
        Self::InvalidHandler(message.into())
    }
}
