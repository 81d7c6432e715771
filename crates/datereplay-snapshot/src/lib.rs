//! Timestamp snapshot store for datereplay.
//!
//! A [`Snapshot`] maps relative file paths to the creation and last-modified
//! times captured from a directory tree. It converts to and from a
//! line-oriented, tab-separated text form:
//!
//! ```text
//! <relative path>\t<created, RFC 3339 UTC>\t<modified, RFC 3339 UTC>
//! ```
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use datereplay_snapshot::{Snapshot, TimestampPair};
//!
//! let mut snapshot = Snapshot::new();
//! snapshot.put(
//!     "x.txt",
//!     TimestampPair::new(
//!         Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap(),
//!         Utc.with_ymd_and_hms(2021, 1, 2, 0, 0, 0).unwrap(),
//!     ),
//! )?;
//!
//! let text = snapshot.serialize();
//! let loaded = Snapshot::deserialize(&text)?;
//! assert_eq!(loaded, snapshot);
//! # Ok::<(), datereplay_snapshot::SnapshotError>(())
//! ```

mod error;
mod snapshot;
mod store;
mod timestamp;

pub use error::{SnapshotError, SnapshotResult};
pub use snapshot::{Snapshot, TimestampPair};
pub use store::{read_from, write_to, LINE_ENDING};
pub use timestamp::{format_timestamp, parse_timestamp};
