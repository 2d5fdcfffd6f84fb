//! Nullable decoration of top-level signatures.

use config::KeywordConfig;
use types::Capabilities;

/// Prefix `base` with the nullable marker when the declared type admits absence.
///
/// Applied once to the fully resolved top-level string, never to union members.
pub fn decorate(
    base: String,
    allows_null: bool,
    suppress: bool,
    capabilities: &Capabilities,
    keywords: &KeywordConfig,
) -> String {
    if suppress || !capabilities.nullable_markers || !allows_null {
        return base;
    }
    format!("{}{}", keywords.nullable_marker, base)
}
