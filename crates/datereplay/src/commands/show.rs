//! The `show` command.

use datereplay_snapshot::{format_timestamp, TimestampPair};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct Entry<'a> {
    path: &'a str,
    #[serde(flatten)]
    times: &'a TimestampPair,
}

/// Print the entries of a snapshot file.
pub fn handle_show(input: &Path, json: bool) -> anyhow::Result<()> {
    let snapshot = datereplay_core::load(input)?;

    if json {
        let entries: Vec<Entry<'_>> = snapshot
            .iter()
            .map(|(path, times)| Entry { path, times })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for (path, times) in snapshot.iter() {
        println!(
            "{}  created {}  modified {}",
            path,
            format_timestamp(&times.created),
            format_timestamp(&times.modified)
        );
    }
    println!("{} entries", snapshot.len());

    Ok(())
}
