//! Logging initialization and configuration.

use datereplay_util::{log, LogConfig, LogLevel};
use std::path::PathBuf;

/// Initialize logging based on verbosity, the configured level and an
/// optional log file. Returns the log file path if logging to file.
///
/// A log file that cannot be opened falls back to stderr with a warning.
pub fn init_logging(
    verbose: bool,
    log_file: Option<PathBuf>,
    configured: Option<LogLevel>,
) -> anyhow::Result<Option<PathBuf>> {
    let level = if verbose {
        LogLevel::Debug
    } else {
        configured.unwrap_or_default()
    };

    let config = LogConfig {
        level,
        include_location: verbose,
        file: log_file,
    };

    if let Err(e) = log::init(&config) {
        eprintln!("Warning: Could not open log file: {e}");
        log::init(&LogConfig {
            file: None,
            ..config
        })?;
        return Ok(None);
    }

    Ok(config.file)
}
