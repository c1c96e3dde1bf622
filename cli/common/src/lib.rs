//! Shared utilities for bucketprobe CLI binaries.
//!
//! This crate provides logging setup, the log-level argument type, and
//! the output formatting helpers used by the `bucketprobe` binary.

pub mod args;
pub mod format;
pub mod logging;

pub use args::LogLevel;
pub use format::{format_bytes, format_number};
pub use logging::init_logging;
