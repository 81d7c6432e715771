//! Reading and writing file timestamps.

use chrono::{DateTime, Utc};
use datereplay_snapshot::TimestampPair;
use filetime::FileTime;
use std::path::Path;
use std::time::SystemTime;
use tracing::debug;

/// Whether this platform can set a file's creation time.
pub const CAN_SET_CREATED: bool = cfg!(any(windows, target_os = "macos"));

/// Read a file's creation and last-modified times from fresh metadata.
///
/// Filesystems that do not record a creation time report the modified time
/// in its place.
pub fn read_times(path: &Path) -> std::io::Result<TimestampPair> {
    let metadata = std::fs::metadata(path)?;
    let modified = metadata.modified()?;
    let created = match metadata.created() {
        Ok(created) => created,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Creation time unavailable, using modified time");
            modified
        }
    };

    Ok(TimestampPair::new(
        DateTime::<Utc>::from(created),
        DateTime::<Utc>::from(modified),
    ))
}

/// Set a file's last-modified time and, where supported, its creation time.
///
/// The access time is left untouched. Only ownership of the file is needed:
/// a file that cannot be opened still gets its modified time, set by path.
pub fn apply_times(path: &Path, pair: &TimestampPair) -> std::io::Result<()> {
    #[cfg(any(windows, target_os = "macos"))]
    {
        match apply_through_handle(path, pair) {
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                debug!(path = %path.display(), error = %e, "Cannot open file, setting modified time only");
            }
            result => return result,
        }
    }

    filetime::set_file_mtime(path, FileTime::from_system_time(SystemTime::from(pair.modified)))
}

// Creation time can only be set through an open handle. Windows needs write
// access for that, macOS needs read access.
#[cfg(any(windows, target_os = "macos"))]
fn apply_through_handle(path: &Path, pair: &TimestampPair) -> std::io::Result<()> {
    let times = std::fs::FileTimes::new().set_modified(SystemTime::from(pair.modified));

    #[cfg(windows)]
    let (times, file) = {
        use std::os::windows::fs::FileTimesExt;
        (
            times.set_created(SystemTime::from(pair.created)),
            std::fs::OpenOptions::new().write(true).open(path)?,
        )
    };

    #[cfg(target_os = "macos")]
    let (times, file) = {
        use std::os::macos::fs::FileTimesExt;
        (
            times.set_created(SystemTime::from(pair.created)),
            std::fs::File::open(path)?,
        )
    };

    file.set_times(times)
}
