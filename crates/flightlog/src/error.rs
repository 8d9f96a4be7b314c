//! Error types for flightlog.
//!
//! This module defines all error types used throughout the flightlog crate.
//! Schema validation failure is deliberately not among them: a loaded file
//! that violates the record schema is reported locally and still used.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for flightlog operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// The data file was required to exist but does not.
    #[error("File {} not found.", .path.display())]
    FileNotFound {
        /// Path that was expected to exist.
        path: PathBuf,
    },

    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The embedded record schema failed to compile.
    #[error("schema error: {message}")]
    SchemaCompile {
        /// Description of what went wrong.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },
}

/// A specialized Result type for flightlog operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Check if this error reports a missing data file.
    #[must_use]
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}
