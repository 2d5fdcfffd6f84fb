#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Hintsmith Introspection Model
//!
//! This crate defines the read-only views a host runtime's introspection
//! facility hands to the resolver: parameter and method handles, the
//! structured type descriptors they carry, and the legacy type information
//! older runtime generations report instead. Snapshots bundle a captured set
//! of methods with the runtime profile they were captured on.

pub mod descriptor;
pub mod handles;
pub mod snapshot;

/// Canned handles and profiles for tests.
#[cfg(feature = "test-utils")]
pub mod fixtures;

pub use descriptor::{NamedType, TypeDescriptor, UnionType};
pub use handles::{LegacyInfo, MethodHandle, ParameterHandle};
pub use snapshot::{IntrospectionSnapshot, SnapshotError};
