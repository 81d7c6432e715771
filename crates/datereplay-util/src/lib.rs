//! Shared utilities for datereplay.
//!
//! This crate provides common utilities used across the datereplay workspace:
//! - Logging setup with tracing
//! - Path utilities, including relative snapshot keys
//! - RAII-based timing for operation measurement

pub mod log;
pub mod path;
pub mod timing;

pub use log::{LogConfig, LogLevel};
pub use path::relative_key;
pub use timing::TimingGuard;
