#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Logging utilities for Hintsmith.
//!
//! Library code emits `tracing` events; binaries and test harnesses decide
//! where they go by calling [`init`] or [`init_to_file`] once.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, falling back to `level`.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init(level: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

/// Installs a subscriber appending to the file at `path`.
///
/// Returns `Ok(false)` if a global subscriber was already installed.
pub fn init_to_file(level: &str, path: &Path) -> std::io::Result<bool> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .is_ok())
}
