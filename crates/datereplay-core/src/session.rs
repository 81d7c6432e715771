//! Per-caller collection state.
//!
//! A [`Session`] holds the snapshot a front end is working with, along with
//! the values it shows in its status bar. Collect and load replace the
//! snapshot only when they succeed.

use crate::engine::{self, ReplayOptions, ReplayReport};
use crate::{EngineResult, PathRewrite};
use datereplay_snapshot::Snapshot;
use datereplay_util::path::display_name;
use serde::Serialize;
use std::path::Path;

/// Values reported to the status display after each operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Status {
    /// Collected directory name or loaded file stem; empty when nothing is held.
    pub collection_name: String,
    pub collected_count: usize,
    pub replayed_count: usize,
}

/// Owner of the current snapshot.
#[derive(Debug, Default)]
pub struct Session {
    snapshot: Snapshot,
    collection_name: String,
    replayed_count: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn status(&self) -> Status {
        Status {
            collection_name: self.collection_name.clone(),
            collected_count: self.snapshot.len(),
            replayed_count: self.replayed_count,
        }
    }

    /// Replace the snapshot with the timestamps found under `dir`.
    pub fn collect(&mut self, dir: &Path, recursive: bool) -> EngineResult<Status> {
        self.snapshot = engine::collect(dir, recursive)?;
        self.collection_name = display_name(dir);
        Ok(self.status())
    }

    /// Replace the snapshot with the contents of a snapshot file.
    pub fn load(&mut self, path: &Path) -> EngineResult<Status> {
        self.snapshot = engine::load(path)?;
        self.collection_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| display_name(path));
        Ok(self.status())
    }

    /// Write the current snapshot to `path`, returning the number of entries.
    pub fn save(&self, path: &Path) -> EngineResult<usize> {
        engine::save(&self.snapshot, path)?;
        Ok(self.snapshot.len())
    }

    /// Replay the current snapshot onto `dir`.
    pub fn replay(
        &mut self,
        dir: &Path,
        rewrite: Option<&PathRewrite>,
        options: &ReplayOptions,
    ) -> EngineResult<ReplayReport> {
        let report = engine::replay(dir, &self.snapshot, rewrite, options)?;
        self.replayed_count = report.replayed;
        Ok(report)
    }

    /// Drop the snapshot and zero the counters.
    pub fn reset(&mut self) {
        self.snapshot.clear();
        self.collection_name.clear();
        self.replayed_count = 0;
    }
}
