#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Host Runtime Generations
//!
//! This crate describes the host runtimes whose introspection output Hintsmith
//! consumes: their flavors, their versions, and the capabilities each
//! generation of the introspection model offers. Capability detection happens
//! once per profile so the resolver can dispatch on plain flags.

/// Capability detection for runtime generations.
///
/// This module provides `GenerationThresholds` (the version boundaries at which
/// the introspection model changed), `Capabilities` (the flags the resolver
/// consumes) and `RuntimeProfile` (flavor, version and capabilities bundled).
pub mod capabilities;
/// Type-safe names for host runtime flavors.
pub mod runtime;
/// Runtime version representation and parsing
pub mod version;

pub use capabilities::{Capabilities, GenerationThresholds, RuntimeProfile};
pub use runtime::RuntimeFlavor;
pub use version::{RuntimeVersion, VersionError};
