//! Command handlers for the datereplay CLI.

pub mod collect;
pub mod logging;
pub mod replay;
pub mod rewrite;
pub mod show;
pub mod status;

pub use collect::*;
pub use logging::*;
pub use replay::*;
pub use rewrite::*;
pub use show::*;
pub use status::*;
