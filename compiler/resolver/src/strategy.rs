//! Resolution strategy selection.
//!
//! Each runtime generation describes parameter types differently. Exactly one
//! strategy applies to a given parameter; it is picked once per call from the
//! profile's capabilities and the parameter's legacy flags.

use reflection::ParameterHandle;
use types::Capabilities;

/// How a parameter's declared type must be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionStrategy {
    /// Pre-structured runtime reporting the primitive array flag.
    LegacyArray,
    /// Compatibility-mode runtime exposing a free-text type hint.
    LegacyTextHint,
    /// Pre-structured runtime; read the class accessor (or the textual dump on defective releases).
    LegacyClassAccessor,
    /// Structured type descriptors.
    Structured,
}

impl ResolutionStrategy {
    /// Pick the strategy for `param` on a runtime with `capabilities`.
    ///
    /// Rules are checked in priority order; the first match wins.
    pub fn detect(capabilities: &Capabilities, param: &ParameterHandle) -> Self {
        if !capabilities.structured_types && param.legacy.is_array {
            ResolutionStrategy::LegacyArray
        } else if capabilities.legacy_text_hints {
            ResolutionStrategy::LegacyTextHint
        } else if !capabilities.structured_types {
            ResolutionStrategy::LegacyClassAccessor
        } else {
            ResolutionStrategy::Structured
        }
    }

    /// Whether this strategy bypasses structured resolution.
    pub fn is_legacy(&self) -> bool { !matches!(self, ResolutionStrategy::Structured) }

    /// Short name used in log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionStrategy::LegacyArray => "legacy-array",
            ResolutionStrategy::LegacyTextHint => "legacy-text-hint",
            ResolutionStrategy::LegacyClassAccessor => "legacy-class-accessor",
            ResolutionStrategy::Structured => "structured",
        }
    }
}

impl std::fmt::Display for ResolutionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
