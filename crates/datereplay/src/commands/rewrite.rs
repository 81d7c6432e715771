//! The `rewrite` command.

use datereplay_core::rewrite::rewrite;

/// Print `path` after applying the rewrite.
pub fn handle_rewrite(path: &str, pattern: &str, replacement: &str) -> anyhow::Result<()> {
    println!("{}", rewrite(path, pattern, replacement)?);
    Ok(())
}
