//! Text form of a snapshot and file helpers.

use crate::timestamp::{format_timestamp, parse_timestamp};
use crate::{Snapshot, SnapshotError, SnapshotResult, TimestampPair};
use std::path::Path;
use tracing::{debug, info};

/// Platform line terminator used when writing snapshots.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Platform line terminator used when writing snapshots.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

const FIELD_SEPARATOR: char = '\t';

impl Snapshot {
    /// Render one `path<TAB>created<TAB>modified` line per entry, each
    /// followed by [`LINE_ENDING`].
    pub fn serialize(&self) -> String {
        let mut output = String::new();

        for (path, pair) in self.iter() {
            output.push_str(path);
            output.push(FIELD_SEPARATOR);
            output.push_str(&format_timestamp(&pair.created));
            output.push(FIELD_SEPARATOR);
            output.push_str(&format_timestamp(&pair.modified));
            output.push_str(LINE_ENDING);
        }

        output
    }

    /// Parse snapshot text into a new snapshot.
    ///
    /// Accepts `\n` and `\r\n` line endings. Any malformed line fails the
    /// whole parse; no partially filled snapshot is ever returned.
    pub fn deserialize(text: &str) -> SnapshotResult<Snapshot> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut snapshot = Snapshot::new();

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();

            let [path, created, modified] = fields.as_slice() else {
                return Err(SnapshotError::parse(
                    line_no,
                    format!(
                        "expected 3 tab-separated fields, found {}",
                        fields.len()
                    ),
                ));
            };

            let created = parse_timestamp(created)
                .map_err(|e| SnapshotError::parse(line_no, format!("creation time: {e}")))?;
            let modified = parse_timestamp(modified)
                .map_err(|e| SnapshotError::parse(line_no, format!("modified time: {e}")))?;

            snapshot
                .put(*path, TimestampPair::new(created, modified))
                .map_err(|e| SnapshotError::parse(line_no, e.to_string()))?;
        }

        debug!(entries = snapshot.len(), "Parsed snapshot text");
        Ok(snapshot)
    }
}

/// Read and parse a snapshot file.
pub fn read_from(path: &Path) -> SnapshotResult<Snapshot> {
    let text = std::fs::read_to_string(path).map_err(|source| SnapshotError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let snapshot = Snapshot::deserialize(&text)?;
    info!(path = %path.display(), entries = snapshot.len(), "Loaded snapshot");
    Ok(snapshot)
}

/// Serialize a snapshot and write it to `path`, replacing any existing file.
pub fn write_to(snapshot: &Snapshot, path: &Path) -> SnapshotResult<()> {
    std::fs::write(path, snapshot.serialize()).map_err(|source| SnapshotError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), entries = snapshot.len(), "Saved snapshot");
    Ok(())
}
