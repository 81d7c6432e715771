//! Path utilities.
//!
//! This module provides utilities for working with file paths.

use std::path::{Component, Path, PathBuf};

/// Separator used inside snapshot keys, on every platform.
pub const KEY_SEPARATOR: char = '/';

/// Get the datereplay configuration directory.
///
/// This follows XDG conventions on Linux/macOS:
/// - `$XDG_CONFIG_HOME/datereplay` if set
/// - `~/.config/datereplay` otherwise
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("datereplay"))
}

/// Make a path relative to a base directory and render it as a snapshot key.
///
/// Components are joined with [`KEY_SEPARATOR`] so that keys collected on one
/// platform match files found on another. Returns `None` if the path is not
/// within the base directory or is the base directory itself.
pub fn relative_key(path: &Path, base: &Path) -> Option<String> {
    let relative = path.strip_prefix(base).ok()?;

    let mut key = String::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                if !key.is_empty() {
                    key.push(KEY_SEPARATOR);
                }
                key.push_str(&part.to_string_lossy());
            }
            Component::CurDir => {}
            _ => return None,
        }
    }

    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

/// Final component of a directory or file path, used as a collection name.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
