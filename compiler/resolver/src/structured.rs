//! Structured type resolution.

use config::KeywordConfig;
use reflection::{NamedType, TypeDescriptor};

use crate::keywords::qualify_reference;

/// Render `descriptor` as a canonical signature string.
///
/// Union members are resolved independently and joined in declaration order;
/// nested unions flatten into the same list. Built-in names and the
/// implementing-subclass placeholder are emitted verbatim. Every other name is
/// qualified, with the self-reference keyword replaced by `declaring_type`.
///
/// Nullability is not rendered here; see [`crate::nullable::decorate`].
pub fn type_to_string(
    descriptor: &TypeDescriptor,
    declaring_type: &str,
    keywords: &KeywordConfig,
) -> String {
    match descriptor {
        TypeDescriptor::Union(union) => union
            .members
            .iter()
            .map(|member| type_to_string(member, declaring_type, keywords))
            .collect::<Vec<_>>()
            .join(&keywords.union_separator),
        TypeDescriptor::Named(named) => named_to_string(named, declaring_type, keywords),
    }
}

fn named_to_string(named: &NamedType, declaring_type: &str, keywords: &KeywordConfig) -> String {
    if named.builtin || named.name == keywords.subclass_placeholder {
        return named.name.clone();
    }

    qualify_reference(&named.name, declaring_type, keywords)
}
