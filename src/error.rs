//! Unified error types for csvlog-tools.
//!
//! Loader and index failures abort the whole comparison; there is no partial
//! report. Schema mismatches between two snapshots are deliberately *not*
//! errors — they are carried inside the diff result and reported alongside it.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for csvlog-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LogDiffError {
    /// IO errors with path context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Errors while parsing a snapshot file
    #[error("Failed to load {}: {}", .path.display(), .source)]
    Load {
        path: PathBuf,
        #[source]
        source: LoadErrorKind,
    },

    /// Errors while building a row index
    #[error("Failed to index {}: {}", .path.display(), .source)]
    Index {
        path: PathBuf,
        #[source]
        source: IndexErrorKind,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific load error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadErrorKind {
    #[error("file is empty - no header line")]
    MissingHeader,

    #[error("line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Specific index error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum IndexErrorKind {
    #[error("key column '{column}' not found in header (columns: {available})")]
    MissingKeyColumn { column: String, available: String },
}

/// Convenient Result type for csvlog-tools operations
pub type Result<T> = std::result::Result<T, LogDiffError>;

impl LogDiffError {
    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a load error for a specific file
    pub fn load(path: impl Into<PathBuf>, source: LoadErrorKind) -> Self {
        Self::Load {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed-row error with the 1-based physical line number
    pub fn malformed_row(
        path: impl Into<PathBuf>,
        line: usize,
        expected: usize,
        found: usize,
    ) -> Self {
        Self::load(
            path,
            LoadErrorKind::MalformedRow {
                line,
                expected,
                found,
            },
        )
    }

    /// Create a missing-key-column error naming the file and the column
    pub fn missing_key_column(
        path: impl Into<PathBuf>,
        column: impl Into<String>,
        header: &[String],
    ) -> Self {
        Self::Index {
            path: path.into(),
            source: IndexErrorKind::MissingKeyColumn {
                column: column.into(),
                available: header.join(", "),
            },
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<std::io::Error> for LogDiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}
