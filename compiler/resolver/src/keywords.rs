//! Keyword checks and name qualification.

use config::KeywordConfig;

/// Anchor `name` at the namespace root.
///
/// A name that already carries the root prefix is returned with exactly one prefix.
pub fn qualify(name: &str, keywords: &KeywordConfig) -> String {
    let root = keywords.namespace_root.as_str();
    let bare = if root.is_empty() { name } else { name.strip_prefix(root).unwrap_or(name) };
    format!("{}{}", root, bare)
}

/// Qualify a reference-type name, substituting `declaring_type` for the
/// self-reference keyword.
pub fn qualify_reference(name: &str, declaring_type: &str, keywords: &KeywordConfig) -> String {
    let name = if name == keywords.self_keyword { declaring_type } else { name };
    qualify(name, keywords)
}

/// Whether `name` is a type keyword reserved by the host language (case-insensitive).
pub fn is_reserved_word(name: &str, keywords: &KeywordConfig) -> bool {
    keywords.reserved_words.iter().any(|w| w.eq_ignore_ascii_case(name))
}

/// Whether `name` is exactly one of the scalar names reported by legacy free-text hints.
pub fn is_legacy_scalar(name: &str, keywords: &KeywordConfig) -> bool {
    keywords.legacy_scalar_names.iter().any(|w| w == name)
}
