//! Error types for dataset access.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Result type for dataset operations.
pub type DataResult<T> = Result<T, DataError>;

/// Errors raised while resolving, reading or decoding dataset files.
#[derive(Debug, Error)]
pub enum DataError {
    /// The requested catalog or detail file does not exist.
    #[error("data file not found: {}", path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The file exists but is not well-formed YAML for the expected record.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying decoder error.
        source: serde_yaml::Error,
    },

    /// A record could not be encoded for writing.
    #[error("failed to serialize {}: {source}", path.display())]
    Serialize {
        /// File being written.
        path: PathBuf,
        /// Underlying encoder error.
        source: serde_yaml::Error,
    },

    /// Any other filesystem failure.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        /// File or directory being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// An id that cannot name a data file.
    #[error("invalid entity id '{0}'")]
    InvalidId(String),

    /// The record decoded but violates a load-time rule.
    #[error("invalid record in {}: {message}", path.display())]
    Schema {
        /// File holding the record.
        path: PathBuf,
        /// What was wrong with it.
        message: String,
    },
}

impl DataError {
    /// Whether this error means the requested file is simply absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DataError::NotFound { .. })
    }
}
