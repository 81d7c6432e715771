//! Snapshot data structures.

use crate::{SnapshotError, SnapshotResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Creation and last-modified time captured for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimestampPair {
    /// When the file was created.
    pub created: DateTime<Utc>,

    /// When the file was last written.
    pub modified: DateTime<Utc>,
}

impl TimestampPair {
    pub fn new(created: DateTime<Utc>, modified: DateTime<Utc>) -> Self {
        Self { created, modified }
    }
}

/// Mapping from relative file path to its captured timestamps.
///
/// Keys are unique, non-empty and use `/` as the separator. Entries keep
/// their insertion order so serialization is deterministic. A snapshot is
/// always replaced as a whole; there is no merge.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    entries: Vec<(String, TimestampPair)>,
    index: HashMap<String, usize>,
}

impl Snapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Insert an entry for `path`.
    ///
    /// Inserting a path that is already present fails with
    /// [`SnapshotError::DuplicateKey`]; existing entries are never
    /// overwritten.
    pub fn put(&mut self, path: impl Into<String>, pair: TimestampPair) -> SnapshotResult<()> {
        let path = path.into();
        validate_path(&path)?;

        if self.index.contains_key(&path) {
            return Err(SnapshotError::DuplicateKey(path));
        }

        self.index.insert(path.clone(), self.entries.len());
        self.entries.push((path, pair));
        Ok(())
    }

    /// Look up the timestamps stored for `path`.
    pub fn get(&self, path: &str) -> Option<&TimestampPair> {
        self.index.get(path).map(|&i| &self.entries[i].1)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TimestampPair)> {
        self.entries.iter().map(|(path, pair)| (path.as_str(), pair))
    }
}

/// Two snapshots are equal when they hold the same keys with the same
/// timestamps, regardless of order.
impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(path, pair)| other.get(path) == Some(pair))
    }
}

impl Eq for Snapshot {}

fn validate_path(path: &str) -> SnapshotResult<()> {
    let reason = if path.is_empty() {
        "path is empty"
    } else if path.contains('\t') {
        "path contains a tab"
    } else if path.contains(|c| c == '\n' || c == '\r') {
        "path contains a line break"
    } else {
        return Ok(());
    };

    Err(SnapshotError::InvalidPath {
        path: path.to_string(),
        reason,
    })
}
