//! The `collect` command.

use super::print_status;
use datereplay_core::{Config, Session};
use datereplay_util::path::display_name;
use std::path::Path;

/// Collect timestamps under `dir` and save them to `out`.
pub fn handle_collect(dir: &Path, out: &Path, config: &Config) -> anyhow::Result<()> {
    let mut session = Session::new();
    let status = session.collect(dir, config.recursive.unwrap_or(false))?;
    let saved = session.save(out)?;

    print_status(&status);
    println!("Saved {} items to \"{}\"", saved, display_name(out));
    Ok(())
}
