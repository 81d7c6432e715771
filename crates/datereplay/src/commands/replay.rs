//! The `replay` command.

use super::print_status;
use datereplay_core::{Config, ReplayOptions, Session};
use std::path::Path;

/// Load a snapshot file and replay it onto `dir`.
///
/// Fails when any file could not be updated, including in
/// continue-on-error mode once the walk has finished.
pub fn handle_replay(
    dir: &Path,
    input: &Path,
    config: &Config,
    dry_run: bool,
    json: bool,
) -> anyhow::Result<()> {
    let rewrite = config.rewrite()?;
    let options = ReplayOptions {
        dry_run,
        ..config.replay_options()
    };

    let mut session = Session::new();
    session.load(input)?;
    let report = session.replay(dir, rewrite.as_ref(), &options)?;
    let status = session.status();

    if json {
        let output = serde_json::json!({
            "status": status,
            "report": report,
            "dry_run": dry_run,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_status(&status);
        if dry_run {
            println!(
                "Dry run: {} of {} files would be updated, nothing was changed",
                report.replayed, report.scanned
            );
        }
        for failure in &report.failures {
            eprintln!("Failed: {}: {}", failure.path.display(), failure.message);
        }
    }

    if !report.failures.is_empty() {
        anyhow::bail!(
            "{} of {} matched files could not be updated",
            report.failures.len(),
            report.replayed + report.failures.len()
        );
    }

    Ok(())
}
