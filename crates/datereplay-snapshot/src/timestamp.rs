//! Timestamp text form used in snapshot files.
//!
//! Written as RFC 3339 in UTC with a `Z` suffix. Reading always yields UTC:
//! offsets are converted, and values without any zone are taken as UTC.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// Formats with an explicit offset other than RFC 3339.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f %:z", "%Y-%m-%d %H:%M:%S%.f%:z"];

/// Formats without a zone; parsed values are assumed to be UTC.
///
/// The last two are the invariant-culture forms written by the original
/// desktop tool (`1/2/2021 3:04:05 PM`).
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M:%S",
];

/// Render a timestamp for a snapshot file.
///
/// Whole seconds print without a fraction (`2021-01-01T00:00:00Z`); otherwise
/// every non-zero sub-second digit group is kept so parsing is exact.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parse a timestamp from a snapshot file, adjusting it to UTC.
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, String> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, format) {
            return Ok(dt.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(naive.and_utc());
        }
    }

    Err(format!("invalid timestamp {text:?}"))
}
