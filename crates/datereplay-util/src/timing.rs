//! RAII-based timing utilities for measuring and logging operation durations.
//!
//! # Example
//!
//! ```rust
//! use datereplay_util::timing::TimingGuard;
//!
//! fn collect(dir: &str) {
//!     let _timing = TimingGuard::collect(dir);
//!     // ... walk the directory ...
//!     // Duration is logged when _timing is dropped
//! }
//! # collect("/tmp");
//! ```

use std::time::Instant;
use tracing::{debug, info, warn};

/// Operations at or above this duration are logged at info level.
const INFO_THRESHOLD_MS: u128 = 500;

/// Operations at or above this duration are logged as slow.
const WARN_THRESHOLD_MS: u128 = 30_000;

/// RAII guard that measures and logs the duration of an operation.
///
/// When dropped, logs the elapsed time since creation.
pub struct TimingGuard {
    /// Type of operation (e.g., "collect", "replay", "load")
    operation_type: &'static str,
    /// What the operation ran on, usually a directory or snapshot file
    operation_name: String,
    start: Instant,
}

impl TimingGuard {
    /// Create a new timing guard.
    ///
    /// The duration will be logged when the guard is dropped.
    pub fn new(operation_type: &'static str, operation_name: impl Into<String>) -> Self {
        let operation_name = operation_name.into();
        debug!(
            operation_type = operation_type,
            operation_name = %operation_name,
            "Starting operation"
        );
        Self {
            operation_type,
            operation_name,
            start: Instant::now(),
        }
    }

    /// Create a timing guard for a directory collect.
    pub fn collect(dir: impl Into<String>) -> Self {
        Self::new("collect", dir)
    }

    /// Create a timing guard for a directory replay.
    pub fn replay(dir: impl Into<String>) -> Self {
        Self::new("replay", dir)
    }

    /// Create a timing guard for reading a snapshot file.
    pub fn load(file: impl Into<String>) -> Self {
        Self::new("load", file)
    }

    /// Create a timing guard for writing a snapshot file.
    pub fn save(file: impl Into<String>) -> Self {
        Self::new("save", file)
    }
}

fn format_duration(duration_ms: u128) -> String {
    if duration_ms < 1000 {
        format!("{duration_ms}ms")
    } else if duration_ms < 60_000 {
        format!("{:.2}s", duration_ms as f64 / 1000.0)
    } else {
        let mins = duration_ms / 60_000;
        let secs = (duration_ms % 60_000) as f64 / 1000.0;
        format!("{mins}m {secs:.1}s")
    }
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        let duration_ms = self.start.elapsed().as_millis();
        let duration_str = format_duration(duration_ms);

        if duration_ms >= WARN_THRESHOLD_MS {
            warn!(
                operation_type = self.operation_type,
                operation_name = %self.operation_name,
                duration_ms = duration_ms as u64,
                duration = %duration_str,
                "Slow operation completed"
            );
        } else if duration_ms >= INFO_THRESHOLD_MS {
            info!(
                operation_type = self.operation_type,
                operation_name = %self.operation_name,
                duration_ms = duration_ms as u64,
                duration = %duration_str,
                "Operation completed"
            );
        } else {
            debug!(
                operation_type = self.operation_type,
                operation_name = %self.operation_name,
                duration_ms = duration_ms as u64,
                duration = %duration_str,
                "Operation completed"
            );
        }
    }
}
