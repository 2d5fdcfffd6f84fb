//! Runtime version representation.
//!
//! Host runtimes report their version as a dotted string. Each introspection
//! generation is keyed on the numeric triple parsed from it.
use std::cmp::Ordering;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A parsed host runtime version.
///
/// Accepts formats like:
/// - `7.1.3` or `v7.1.3`
/// - `5.4` (patch defaults to `0`)
/// - `7.0.0-dev` (pre-release suffixes are kept in `version_string` but ignored for ordering)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuntimeVersion {
    /// Original version string as reported by the host.
    pub version_string: String,
    /// Major version component (e.g., `7` in `7.1.3`).
    pub major: u32,
    /// Minor version component (e.g., `1` in `7.1.3`).
    pub minor: u32,
    /// Patch component (e.g., `3` in `7.1.3`).
    pub patch: u32,
}

impl PartialOrd for RuntimeVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for RuntimeVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch))
    }
}

/// Errors that can occur while parsing or handling versions.
#[derive(Error, Debug)]
pub enum VersionError {
    /// The provided string did not match the expected version format.
    #[error("Invalid version format: {0}")]
    InvalidFormat(String),
    /// A numeric parse or regex error occurred.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl RuntimeVersion {
    /// Build a version from its numeric components.
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { version_string: format!("{}.{}.{}", major, minor, patch), major, minor, patch }
    }

    /// Parse a `RuntimeVersion` from a string in the `[v]MAJOR.MINOR[.PATCH][-suffix]` format.
    pub fn from_string(s: &str) -> std::result::Result<Self, VersionError> {
        let re = Regex::new(r"^(?:v)?(\d+)\.(\d+)(?:\.(\d+))?(?:[-+][0-9A-Za-z.-]+)?$")
            .map_err(|e: regex::Error| VersionError::Parse(e.to_string()))?;
        let caps =
            re.captures(s.trim()).ok_or_else(|| VersionError::InvalidFormat(s.to_string()))?;

        let patch = match caps.get(3) {
            Some(m) => m
                .as_str()
                .parse()
                .map_err(|e: std::num::ParseIntError| VersionError::Parse(e.to_string()))?,
            None => 0,
        };

        Ok(Self {
            version_string: s.trim().to_string(),
            major: caps[1]
                .parse()
                .map_err(|e: std::num::ParseIntError| VersionError::Parse(e.to_string()))?,
            minor: caps[2]
                .parse()
                .map_err(|e: std::num::ParseIntError| VersionError::Parse(e.to_string()))?,
            patch,
        })
    }

    /// Return the original version string.
    pub fn as_str(&self) -> &str { &self.version_string }

    /// Numeric identifier in the `MAJOR * 10000 + MINOR * 100 + PATCH` form hosts
    /// commonly expose as a constant (e.g. `70103` for `7.1.3`).
    pub fn id(&self) -> u64 {
        u64::from(self.major) * 10_000 + u64::from(self.minor) * 100 + u64::from(self.patch)
    }

    /// Whether this version is at or above `floor`.
    pub fn at_least(&self, floor: &Self) -> bool { self >= floor }

    /// Whether this version lies in the half-open range `[from, until)`.
    pub fn in_range(&self, from: &Self, until: &Self) -> bool { self >= from && self < until }
}

impl std::fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.version_string)
    }
}

impl std::str::FromStr for RuntimeVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> { Self::from_string(s) }
}

impl Default for RuntimeVersion {
    fn default() -> Self { Self::new(0, 0, 0) }
}
