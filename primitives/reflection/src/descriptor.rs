//! Structured type descriptors.
//!
//! A declared type is either a single named type or an ordered union of
//! further descriptors. Unions may nest; the resolver flattens them.

use serde::{Deserialize, Serialize};

/// Structured description of a declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDescriptor {
    /// A single type reference.
    Named(NamedType),
    /// An ordered set of alternatives.
    Union(UnionType),
}

/// A single type reference, either built-in or a named reference type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedType {
    /// Bare type name as reported by the host (e.g. `int`, `Foo\Bar`, `self`).
    pub name: String,
    /// Whether the host flags this as a built-in/primitive type.
    #[serde(default)]
    pub builtin: bool,
    /// Whether the declared type also admits absence.
    #[serde(default)]
    pub allows_null: bool,
}

/// An ordered union of type descriptors.
///
/// Member order is the declaration order and is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionType {
    /// Union members in declaration order.
    pub members: Vec<TypeDescriptor>,
    /// Whether the union as a whole admits absence.
    #[serde(default)]
    pub allows_null: bool,
}

impl TypeDescriptor {
    /// A non-nullable reference type.
    pub fn named(name: impl Into<String>) -> Self {
        TypeDescriptor::Named(NamedType { name: name.into(), builtin: false, allows_null: false })
    }

    /// A non-nullable built-in type.
    pub fn builtin(name: impl Into<String>) -> Self {
        TypeDescriptor::Named(NamedType { name: name.into(), builtin: true, allows_null: false })
    }

    /// A non-nullable union of `members`, in the given order.
    pub fn union(members: Vec<TypeDescriptor>) -> Self {
        TypeDescriptor::Union(UnionType { members, allows_null: false })
    }

    /// Mark this descriptor as admitting absence.
    pub fn nullable(mut self) -> Self {
        match &mut self {
            TypeDescriptor::Named(named) => named.allows_null = true,
            TypeDescriptor::Union(union) => union.allows_null = true,
        }
        self
    }

    /// Whether the declared type admits absence.
    pub fn allows_null(&self) -> bool {
        match self {
            TypeDescriptor::Named(named) => named.allows_null,
            TypeDescriptor::Union(union) => union.allows_null,
        }
    }

    /// The named type, if this is not a union.
    pub fn as_named(&self) -> Option<&NamedType> {
        match self {
            TypeDescriptor::Named(named) => Some(named),
            TypeDescriptor::Union(_) => None,
        }
    }

    /// Whether this is a union descriptor.
    pub fn is_union(&self) -> bool { matches!(self, TypeDescriptor::Union(_)) }
}
