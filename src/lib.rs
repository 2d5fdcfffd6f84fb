// SPDX-License-Identifier: CC0-1.0

//! Hintsmith umbrella crate.
//!
//! Re-exports the workspace member crates under one name. All functional code
//! lives in the members under `primitives/` and `compiler/`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![warn(deprecated_in_future)]
#![doc(test(attr(warn(unused))))]

pub use config::{Config, ConfigError, KeywordConfig};
pub use reflection::{
    IntrospectionSnapshot, LegacyInfo, MethodHandle, ParameterHandle, TypeDescriptor,
};
pub use resolver::{MethodSignature, ParameterSignature, ResolutionStrategy, SignatureResolver};
pub use types::{Capabilities, RuntimeFlavor, RuntimeProfile, RuntimeVersion};

/// Install logging as described by the `[logging]` section of `config`.
///
/// Returns `Ok(false)` if a subscriber was already installed.
pub fn init_logging(config: &Config) -> std::io::Result<bool> {
    match &config.logging.file {
        Some(path) => logging::init_to_file(&config.logging.level, path),
        None => Ok(logging::init(&config.logging.level)),
    }
}

/// Miscellaneous metadata about the Hintsmith workspace.
pub mod hintsmith_meta {
    /// Version string for the umbrella crate, as reported by Cargo.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}
