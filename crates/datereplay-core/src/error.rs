//! Error types for the core crate.

use datereplay_snapshot::SnapshotError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine error types.
///
/// Every variant is fatal for the operation that produced it.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A directory could not be enumerated, or a file's metadata could not
    /// be read while walking it.
    #[error("Cannot access {}: {source}", path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Timestamps could not be written to a matched file.
    #[error("Cannot set timestamps on {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot store error (duplicate path, parse failure, file I/O).
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// Replay or save was asked to work on an empty collection.
    #[error("Please populate the file collection to {action}.")]
    EmptyCollection { action: &'static str },

    /// The rewrite pattern is not a valid regular expression.
    #[error("Invalid rewrite pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl EngineError {
    pub fn directory_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryAccess {
            path: path.into(),
            source,
        }
    }

    /// Short title for the error, as shown by a front end's error dialog.
    pub fn category(&self) -> &'static str {
        match self {
            Self::DirectoryAccess { .. } => "Directory error",
            Self::FileWrite { .. } => "Replay error",
            Self::Snapshot(SnapshotError::Write { .. }) => "Save file error",
            Self::Snapshot(SnapshotError::Read { .. } | SnapshotError::Parse { .. }) => {
                "Open file error"
            }
            Self::Snapshot(SnapshotError::DuplicateKey(_) | SnapshotError::InvalidPath { .. }) => {
                "Collect error"
            }
            Self::EmptyCollection { .. } => "Empty collection",
            Self::InvalidPattern(_) => "Pattern error",
            Self::Config(_) => "Config error",
        }
    }
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid JSON/JSONC syntax.
    #[error("invalid config at {path}: {message}")]
    InvalidJson { path: String, message: String },

    /// Config file exists but could not be read.
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_message() {
        let err = EngineError::EmptyCollection { action: "replay" };
        assert_eq!(
            err.to_string(),
            "Please populate the file collection to replay."
        );
        assert_eq!(err.category(), "Empty collection");
    }

    #[test]
    fn snapshot_errors_map_to_file_categories() {
        let parse: EngineError = SnapshotError::parse(1, "bad").into();
        assert_eq!(parse.category(), "Open file error");

        let write: EngineError = SnapshotError::Write {
            path: PathBuf::from("out.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        assert_eq!(write.category(), "Save file error");

        let duplicate: EngineError = SnapshotError::DuplicateKey("a".into()).into();
        assert_eq!(duplicate.category(), "Collect error");
    }

    #[test]
    fn directory_access_mentions_path() {
        let err = EngineError::directory_access(
            "/no/such/dir",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("/no/such/dir"));
        assert_eq!(err.category(), "Directory error");
    }
}
