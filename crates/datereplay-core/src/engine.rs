//! Collect and replay operations.

use crate::rewrite::PathRewrite;
use crate::times::{apply_times, read_times};
use crate::walk::walk_files;
use crate::{EngineError, EngineResult};
use datereplay_snapshot::{Snapshot, SnapshotError};
use datereplay_util::TimingGuard;
use serde::Serialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// How a replay walks and writes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayOptions {
    /// Descend into subdirectories.
    pub recursive: bool,

    /// Record write failures and keep going instead of aborting.
    pub continue_on_error: bool,

    /// Count matches without touching any file.
    pub dry_run: bool,
}

/// A matched file whose timestamps could not be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Outcome of a replay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Files found under the target directory.
    pub scanned: usize,

    /// Files whose timestamps were replayed (or would be, in a dry run).
    pub replayed: usize,

    /// Write failures, only populated with `continue_on_error`.
    pub failures: Vec<ReplayFailure>,
}

/// Capture the timestamps of every file under `root`.
///
/// Two files mapping to the same relative path fail the collect with a
/// duplicate-key error, as does any unreadable file. Files whose names
/// contain a tab or a line break cannot be stored and are skipped.
pub fn collect(root: &Path, recursive: bool) -> EngineResult<Snapshot> {
    let _timing = TimingGuard::collect(root.display().to_string());

    let mut snapshot = Snapshot::new();
    for file in walk_files(root, recursive)? {
        let pair =
            read_times(&file.path).map_err(|e| EngineError::directory_access(&file.path, e))?;
        debug!(path = %file.key, created = %pair.created, modified = %pair.modified, "Collected");
        match snapshot.put(file.key, pair) {
            Ok(()) => {}
            Err(SnapshotError::InvalidPath { path, reason }) => {
                warn!(path = %path, reason, "Skipping file that cannot be stored");
            }
            Err(e) => return Err(e.into()),
        }
    }

    info!(root = %root.display(), entries = snapshot.len(), "Collected timestamps");
    Ok(snapshot)
}

/// Apply `snapshot` to the files under `target`.
///
/// Each file's relative path, passed through `rewrite` when given, is looked
/// up in the snapshot. Hits get the stored times, misses are left alone. An
/// empty snapshot is rejected before the target is touched.
pub fn replay(
    target: &Path,
    snapshot: &Snapshot,
    rewrite: Option<&PathRewrite>,
    options: &ReplayOptions,
) -> EngineResult<ReplayReport> {
    if snapshot.is_empty() {
        return Err(EngineError::EmptyCollection { action: "replay" });
    }

    let _timing = TimingGuard::replay(target.display().to_string());
    let mut report = ReplayReport::default();

    for file in walk_files(target, options.recursive)? {
        report.scanned += 1;

        let key = match rewrite {
            Some(rewrite) => rewrite.apply(&file.key),
            None => Cow::Borrowed(file.key.as_str()),
        };

        let Some(pair) = snapshot.get(&key) else {
            debug!(path = %file.key, lookup = %key, "No match");
            continue;
        };

        if options.dry_run {
            debug!(path = %file.key, lookup = %key, "Would replay");
            report.replayed += 1;
            continue;
        }

        match apply_times(&file.path, pair) {
            Ok(()) => {
                debug!(path = %file.key, lookup = %key, "Replayed");
                report.replayed += 1;
            }
            Err(e) if options.continue_on_error => {
                warn!(path = %file.path.display(), error = %e, "Failed to set timestamps");
                report.failures.push(ReplayFailure {
                    path: file.path,
                    message: e.to_string(),
                });
            }
            Err(source) => {
                warn!(replayed = report.replayed, "Replay aborted");
                return Err(EngineError::FileWrite {
                    path: file.path,
                    source,
                });
            }
        }
    }

    info!(
        target = %target.display(),
        scanned = report.scanned,
        replayed = report.replayed,
        failed = report.failures.len(),
        dry_run = options.dry_run,
        "Replayed timestamps"
    );
    Ok(report)
}

/// Read a snapshot file.
pub fn load(path: &Path) -> EngineResult<Snapshot> {
    let _timing = TimingGuard::load(path.display().to_string());
    Ok(datereplay_snapshot::read_from(path)?)
}

/// Write a snapshot file. An empty snapshot is refused.
pub fn save(snapshot: &Snapshot, path: &Path) -> EngineResult<()> {
    if snapshot.is_empty() {
        return Err(EngineError::EmptyCollection { action: "save" });
    }
    let _timing = TimingGuard::save(path.display().to_string());
    datereplay_snapshot::write_to(snapshot, path)?;
    Ok(())
}
