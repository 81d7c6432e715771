//! Snapshot error types.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for snapshot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Errors that can occur during snapshot operations.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The same relative path was inserted twice.
    #[error("Duplicate path in collection: {0}")]
    DuplicateKey(String),

    /// A relative path that cannot be stored or round-tripped.
    #[error("Invalid path {path:?}: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    /// Snapshot text is malformed.
    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Snapshot file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SnapshotError {
    /// Create a parse error for a 1-based line number.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_mentions_line() {
        let err = SnapshotError::parse(3, "expected 3 fields");
        assert_eq!(err.to_string(), "Line 3: expected 3 fields");
    }

    #[test]
    fn read_error_mentions_path() {
        let err = SnapshotError::Read {
            path: PathBuf::from("dates.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("dates.txt"));
    }
}
