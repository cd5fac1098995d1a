//! Error types for fixture loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or querying fixture files.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// The fixture file could not be read.
    #[error("failed to read fixture file at '{path}': {message}")]
    IoError {
        /// Path to the fixture file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The fixture JSON is malformed or has the wrong shape.
    #[error("invalid fixture JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// No transfer fixture exists under the requested key.
    #[error("transfer fixture '{key}' not found")]
    UnknownTransfer {
        /// The missing fixture key.
        key: String,
    },

    /// The requested day offset falls outside the supported calendar.
    #[error("date offset of {days} days is out of range")]
    DateOutOfRange {
        /// Requested offset in days.
        days: i64,
    },
}
