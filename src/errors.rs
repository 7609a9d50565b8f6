//! Error types for graph_poet
//!
//! This module defines the error types used throughout the library.
//! Missing vertices and edges are never errors: queries report them as
//! empty maps, zero weights, or `false`.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PoetError>;

/// Main error type for graph_poet
#[derive(Error, Debug)]
pub enum PoetError {
    /// A negative weight was passed to `set`
    #[error("Invalid weight: {weight} (edge weights must be >= 0)")]
    InvalidWeight { weight: i64 },

    /// A corpus or input source could not be read
    #[error("I/O error: {source} (path: {})", path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl PoetError {
    /// Create an invalid weight error
    pub fn invalid_weight(weight: i64) -> Self {
        Self::InvalidWeight { weight }
    }

    /// Create an I/O error tagged with the path that failed
    pub fn io(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::Io {
            source,
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error came from reading a source
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

impl From<serde_json::Error> for PoetError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
