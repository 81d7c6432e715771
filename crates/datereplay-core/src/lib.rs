//! Collect and replay engine for datereplay.
//!
//! Collecting walks a directory and records each file's creation and
//! last-modified time under its relative path. Replaying walks another (or
//! the same) directory and writes the recorded times back onto every file
//! whose relative path, optionally rewritten by a regex, is in the snapshot.
//!
//! ```no_run
//! use datereplay_core::{collect, replay, ReplayOptions};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), datereplay_core::EngineError> {
//! let snapshot = collect(Path::new("/photos/original"), true)?;
//! // ... copy the tree somewhere, resetting every timestamp ...
//! let report = replay(
//!     Path::new("/photos/copy"),
//!     &snapshot,
//!     None,
//!     &ReplayOptions { recursive: true, ..Default::default() },
//! )?;
//! println!("{} of {} files restored", report.replayed, snapshot.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod rewrite;
pub mod session;
pub mod times;
pub mod walk;

pub use config::Config;
pub use engine::{collect, load, replay, save, ReplayFailure, ReplayOptions, ReplayReport};
pub use error::{ConfigError, EngineError, EngineResult};
pub use rewrite::PathRewrite;
pub use session::{Session, Status};

pub use datereplay_snapshot::{Snapshot, TimestampPair};
