//! Canned handles and profiles for tests in downstream crates.

use types::{GenerationThresholds, RuntimeFlavor, RuntimeProfile, RuntimeVersion};

use crate::descriptor::TypeDescriptor;
use crate::handles::{LegacyInfo, MethodHandle, ParameterHandle};

/// Declaring type used by every fixture handle.
pub const FIXTURE_TYPE: &str = "App\\Fixture\\Subject";

/// Profile for `flavor` at `version`, using default thresholds.
///
/// # Panics
/// Panics if `version` does not parse.
pub fn profile(flavor: RuntimeFlavor, version: &str) -> RuntimeProfile {
    let version = match RuntimeVersion::from_string(version) {
        Ok(version) => version,
        Err(e) => panic!("fixture version '{}' is invalid: {}", version, e),
    };
    RuntimeProfile::detect(flavor, version, &GenerationThresholds::default())
}

/// A typed parameter declared in [`FIXTURE_TYPE`].
pub fn typed_param(name: &str, declared_type: TypeDescriptor) -> ParameterHandle {
    ParameterHandle::new(name, FIXTURE_TYPE).with_type(declared_type)
}

/// An untyped parameter declared in [`FIXTURE_TYPE`].
pub fn untyped_param(name: &str) -> ParameterHandle { ParameterHandle::new(name, FIXTURE_TYPE) }

/// A parameter carrying only legacy type information.
pub fn legacy_param(name: &str, legacy: LegacyInfo) -> ParameterHandle {
    ParameterHandle::new(name, FIXTURE_TYPE).with_legacy(legacy)
}

/// A method declared in [`FIXTURE_TYPE`] returning `return_type`.
pub fn method_returning(name: &str, return_type: TypeDescriptor) -> MethodHandle {
    MethodHandle::new(name, FIXTURE_TYPE).with_return_type(return_type)
}
