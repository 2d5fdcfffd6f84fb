//! Type-safe names for the host runtimes whose introspection output we consume.
//!
//! To add a runtime later: add a variant to `RuntimeFlavor`, a row in
//! `RUNTIME_METADATA`, and teach `Capabilities::detect` about it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Host runtime flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RuntimeFlavor {
    /// The reference interpreter.
    #[default]
    #[serde(rename = "reference")]
    Reference,
    /// The alternative managed runtime running in compatibility mode.
    #[serde(rename = "compat")]
    Compat,
}

/// Metadata for a runtime flavor.
struct RuntimeMetadata {
    as_str: &'static str,
    display_name: &'static str,
    legacy_text_hints: bool,
    legacy_return_accessor: bool,
}

impl RuntimeMetadata {
    const fn new(
        as_str: &'static str,
        display_name: &'static str,
        legacy_text_hints: bool,
        legacy_return_accessor: bool,
    ) -> Self {
        Self { as_str, display_name, legacy_text_hints, legacy_return_accessor }
    }
}

const RUNTIME_METADATA: [RuntimeMetadata; 2] = [
    RuntimeMetadata::new("reference", "Reference interpreter", false, false),
    RuntimeMetadata::new("compat", "Compatibility-mode runtime", true, true),
];

impl RuntimeFlavor {
    fn metadata(&self) -> &'static RuntimeMetadata {
        let index = match self {
            RuntimeFlavor::Reference => 0,
            RuntimeFlavor::Compat => 1,
        };
        &RUNTIME_METADATA[index]
    }

    /// Get the string representation of the flavor.
    pub fn as_str(&self) -> &'static str { self.metadata().as_str }

    /// Get the human-readable display name for the flavor.
    pub fn display_name(&self) -> &'static str { self.metadata().display_name }

    /// Whether parameters expose a free-text type hint instead of structured descriptors.
    pub fn exposes_legacy_text_hints(&self) -> bool { self.metadata().legacy_text_hints }

    /// Whether the return-type accessor is incompatible with structured resolution.
    pub fn has_legacy_return_accessor(&self) -> bool { self.metadata().legacy_return_accessor }
}

impl FromStr for RuntimeFlavor {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "reference" => Ok(RuntimeFlavor::Reference),
            "compat" => Ok(RuntimeFlavor::Compat),
            _ => Err(format!("Unknown runtime flavor: {}", s)),
        }
    }
}

impl fmt::Display for RuntimeFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flavor_as_str() {
        assert_eq!(RuntimeFlavor::Reference.as_str(), "reference");
        assert_eq!(RuntimeFlavor::Compat.as_str(), "compat");
    }

    #[test]
    fn test_flavor_from_str() {
        assert_eq!("reference".parse::<RuntimeFlavor>(), Ok(RuntimeFlavor::Reference));
        assert_eq!("compat".parse::<RuntimeFlavor>(), Ok(RuntimeFlavor::Compat));
        assert!("jvm".parse::<RuntimeFlavor>().is_err());
    }

    #[test]
    fn test_flavor_capabilities() {
        assert!(!RuntimeFlavor::Reference.exposes_legacy_text_hints());
        assert!(!RuntimeFlavor::Reference.has_legacy_return_accessor());
        assert!(RuntimeFlavor::Compat.exposes_legacy_text_hints());
        assert!(RuntimeFlavor::Compat.has_legacy_return_accessor());
    }

    #[test]
    fn test_flavor_default_and_display() {
        assert_eq!(RuntimeFlavor::default(), RuntimeFlavor::Reference);
        assert_eq!(RuntimeFlavor::Compat.to_string(), "compat");
        assert_eq!(RuntimeFlavor::Compat.display_name(), "Compatibility-mode runtime");
    }
}
