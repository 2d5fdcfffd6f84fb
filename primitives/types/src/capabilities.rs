//! Capability detection for host runtime generations.
//!
//! The host's introspection model changed shape several times. Rather than
//! probing the version at every decision point, the flags the resolver needs
//! are computed once from `(flavor, version)` and carried in a
//! [`RuntimeProfile`].

use serde::{Deserialize, Serialize};

use crate::runtime::RuntimeFlavor;
use crate::version::RuntimeVersion;

/// Version boundaries at which the reference runtime changed its introspection model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationThresholds {
    /// First version exposing structured type descriptors on parameters.
    pub structured_types: RuntimeVersion,
    /// First version whose declared types can carry a nullable marker.
    pub nullable_markers: RuntimeVersion,
    /// First version exposing return-type descriptors on methods.
    pub return_types: RuntimeVersion,
    /// First point release whose class accessor is defective.
    pub class_accessor_defect_from: RuntimeVersion,
    /// First point release after the defective range (exclusive bound).
    pub class_accessor_defect_until: RuntimeVersion,
}

impl Default for GenerationThresholds {
    fn default() -> Self {
        Self {
            structured_types: RuntimeVersion::new(7, 0, 0),
            nullable_markers: RuntimeVersion::new(7, 1, 0),
            return_types: RuntimeVersion::new(7, 0, 0),
            class_accessor_defect_from: RuntimeVersion::new(5, 4, 0),
            class_accessor_defect_until: RuntimeVersion::new(5, 5, 0),
        }
    }
}

/// Flags describing which introspection facilities a runtime generation offers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Parameters expose structured type descriptors.
    pub structured_types: bool,
    /// Declared types may be rendered with a nullable marker.
    pub nullable_markers: bool,
    /// Methods expose return-type descriptors.
    pub return_types: bool,
    /// Parameters expose a legacy free-text type hint.
    pub legacy_text_hints: bool,
    /// The return-type accessor is incompatible with structured resolution.
    pub legacy_return_accessor: bool,
    /// The direct class-name accessor is unreliable; fall back to the textual dump.
    pub class_accessor_defect: bool,
}

impl Capabilities {
    /// Detect the capabilities of `flavor` at `version`.
    pub fn detect(
        flavor: RuntimeFlavor,
        version: &RuntimeVersion,
        thresholds: &GenerationThresholds,
    ) -> Self {
        Self {
            structured_types: version.at_least(&thresholds.structured_types),
            nullable_markers: version.at_least(&thresholds.nullable_markers),
            return_types: version.at_least(&thresholds.return_types),
            legacy_text_hints: flavor.exposes_legacy_text_hints(),
            legacy_return_accessor: flavor.has_legacy_return_accessor(),
            class_accessor_defect: version.in_range(
                &thresholds.class_accessor_defect_from,
                &thresholds.class_accessor_defect_until,
            ),
        }
    }

    /// Capabilities of a current reference runtime: structured everything, no legacy paths.
    pub fn modern() -> Self {
        Self {
            structured_types: true,
            nullable_markers: true,
            return_types: true,
            legacy_text_hints: false,
            legacy_return_accessor: false,
            class_accessor_defect: false,
        }
    }
}

/// The runtime a snapshot was captured from, together with its detected capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeProfile {
    /// Runtime flavor.
    pub flavor: RuntimeFlavor,
    /// Runtime version.
    pub version: RuntimeVersion,
    /// Capabilities detected for this flavor and version.
    pub capabilities: Capabilities,
}

impl RuntimeProfile {
    /// Build a profile by detecting capabilities from `flavor` and `version`.
    pub fn detect(
        flavor: RuntimeFlavor,
        version: RuntimeVersion,
        thresholds: &GenerationThresholds,
    ) -> Self {
        let capabilities = Capabilities::detect(flavor, &version, thresholds);
        Self { flavor, version, capabilities }
    }

    /// Build a profile from capabilities reported directly by the host.
    pub fn with_capabilities(
        flavor: RuntimeFlavor,
        version: RuntimeVersion,
        capabilities: Capabilities,
    ) -> Self {
        Self { flavor, version, capabilities }
    }

    /// Profile for a current reference runtime.
    pub fn modern() -> Self {
        Self {
            flavor: RuntimeFlavor::Reference,
            version: RuntimeVersion::new(8, 3, 0),
            capabilities: Capabilities::modern(),
        }
    }
}

impl Default for RuntimeProfile {
    fn default() -> Self { Self::modern() }
}
