//! Status output shared by the commands.

use datereplay_core::Status;

/// Print the collection name and counters.
pub fn print_status(status: &Status) {
    let name = if status.collection_name.is_empty() {
        "(none)"
    } else {
        status.collection_name.as_str()
    };

    println!("Collection: {}", name);
    println!("Collected:  {}", status.collected_count);
    println!("Replayed:   {}", status.replayed_count);
}
