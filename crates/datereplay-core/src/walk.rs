//! Directory enumeration.

use crate::{EngineError, EngineResult};
use datereplay_util::relative_key;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// A regular file found under a walk root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    /// Full path to the file.
    pub path: PathBuf,

    /// Path relative to the walk root, `/`-separated.
    pub key: String,
}

/// List the regular files under `root`.
///
/// Only the top level is listed unless `recursive` is set. Entries are sorted
/// by file name within each directory. Symbolic links are not followed and
/// are skipped, as are other non-regular entries. Any enumeration failure
/// aborts the walk.
pub fn walk_files(root: &Path, recursive: bool) -> EngineResult<Vec<WalkedFile>> {
    let metadata = std::fs::metadata(root).map_err(|e| EngineError::directory_access(root, e))?;
    if !metadata.is_dir() {
        return Err(EngineError::directory_access(
            root,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a directory"),
        ));
    }

    let mut walker = WalkDir::new(root).min_depth(1).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            EngineError::directory_access(path, e.into())
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        match relative_key(entry.path(), root) {
            Some(key) => files.push(WalkedFile {
                path: entry.into_path(),
                key,
            }),
            None => warn!(path = %entry.path().display(), "Skipping file outside walk root"),
        }
    }

    Ok(files)
}
