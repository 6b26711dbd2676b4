//! Typed error handling for deadkey.
//!
//! Only the definitions file and the configuration file can fail a run.
//! Per-file scan failures are absorbed by the scanner and never surface as a
//! `DeadkeyError`.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for deadkey operations.
#[derive(Error, Debug)]
pub enum DeadkeyError {
    /// I/O error when reading a file the run cannot proceed without
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// A key could not be turned into a whole-word matcher
    #[error("Pattern error for key '{key}': {message}")]
    Pattern { key: String, message: String },
}

impl DeadkeyError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a pattern error.
    pub fn pattern(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Pattern {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Config { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience type alias for deadkey results.
pub type DeadkeyResult<T> = Result<T, DeadkeyError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> DeadkeyResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> DeadkeyResult<T> {
        self.map_err(|e| DeadkeyError::io(path, e))
    }
}
