#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Hintsmith Signature Resolver
//!
//! Resolves the declared type of a parameter or return value into a single
//! canonical signature string, suitable for re-declaring the same type in a
//! generated stand-in implementation.
//!
//! Resolution runs in three steps:
//! 1. A [`ResolutionStrategy`] is picked from the runtime's capabilities.
//! 2. Legacy strategies produce the final string directly; the structured
//!    strategy renders the type descriptor with [`type_to_string`].
//! 3. Structured results get a nullable marker when the declared type admits
//!    absence and the runtime supports the marker.
//!
//! None of the operations fail. A parameter or method without a usable
//! declared type resolves to `None`.
//!
//! ```rust
//! use reflection::{ParameterHandle, TypeDescriptor};
//! use resolver::SignatureResolver;
//! use types::RuntimeProfile;
//!
//! let resolver = SignatureResolver::new(RuntimeProfile::modern(), Default::default());
//! let param = ParameterHandle::new("next", "App\\Node")
//!     .with_type(TypeDescriptor::named("self").nullable());
//!
//! assert_eq!(resolver.parameter_type_signature(&param, false).as_deref(), Some("?\\App\\Node"));
//! assert_eq!(resolver.parameter_type_signature(&param, true).as_deref(), Some("\\App\\Node"));
//! ```

pub mod keywords;
pub mod legacy;
pub mod nullable;
pub mod signature;
pub mod strategy;
pub mod structured;

pub use config::{Config, ConfigError, KeywordConfig};
pub use legacy::LegacyResolution;
use reflection::{IntrospectionSnapshot, MethodHandle, ParameterHandle, TypeDescriptor};
pub use signature::{MethodSignature, ParameterSignature};
pub use strategy::ResolutionStrategy;
pub use structured::type_to_string;
use types::{Capabilities, RuntimeFlavor, RuntimeProfile, RuntimeVersion};

/// Resolves declared types captured on one runtime into canonical signatures.
///
/// The resolver holds no mutable state; every method is a pure function of its
/// inputs and may be called concurrently.
#[derive(Debug, Clone)]
pub struct SignatureResolver {
    profile: RuntimeProfile,
    keywords: KeywordConfig,
}

impl SignatureResolver {
    /// Create a resolver for `profile` rendering with `keywords`.
    pub fn new(profile: RuntimeProfile, keywords: KeywordConfig) -> Self {
        Self { profile, keywords }
    }

    /// Create a resolver for `profile` using the keywords from `config`.
    pub fn from_config(profile: RuntimeProfile, config: &Config) -> Self {
        Self::new(profile, config.keywords.clone())
    }

    /// Create a resolver for the runtime a snapshot was captured on.
    pub fn for_snapshot(snapshot: &IntrospectionSnapshot, config: &Config) -> Self {
        Self::from_config(snapshot.profile.clone(), config)
    }

    /// Detect the profile of `flavor` at `version` using the thresholds in `config`.
    pub fn detect(
        flavor: RuntimeFlavor,
        version: RuntimeVersion,
        config: &Config,
    ) -> Result<Self, ConfigError> {
        let thresholds = config.thresholds()?;
        Ok(Self::from_config(RuntimeProfile::detect(flavor, version, &thresholds), config))
    }

    /// The runtime profile this resolver targets.
    pub fn profile(&self) -> &RuntimeProfile { &self.profile }

    /// The keywords used when rendering.
    pub fn keywords(&self) -> &KeywordConfig { &self.keywords }

    fn capabilities(&self) -> &Capabilities { &self.profile.capabilities }

    /// The strategy that applies to `param` on this runtime.
    pub fn strategy_for(&self, param: &ParameterHandle) -> ResolutionStrategy {
        ResolutionStrategy::detect(self.capabilities(), param)
    }

    /// Whether `param` is declared with exactly the primitive array type.
    ///
    /// Union types and untyped parameters are never array types.
    pub fn is_array_type(&self, param: &ParameterHandle) -> bool {
        if !self.capabilities().structured_types {
            return param.legacy.is_array;
        }

        matches!(
            param.declared_type.as_ref().and_then(TypeDescriptor::as_named),
            Some(named) if named.name == self.keywords.array_type
        )
    }

    /// Canonical signature of `param`'s declared type.
    ///
    /// With `suppress_nullable` set, the nullable marker is never emitted.
    pub fn parameter_type_signature(
        &self,
        param: &ParameterHandle,
        suppress_nullable: bool,
    ) -> Option<String> {
        let strategy = self.strategy_for(param);
        tracing::trace!(parameter = %param.name, %strategy, "resolving parameter type");

        if strategy.is_legacy() {
            return legacy::resolve(strategy, param, self.capabilities(), &self.keywords)
                .into_signature();
        }

        let declared = param.declared_type.as_ref()?;
        Some(self.render(declared, &param.declaring_type, suppress_nullable))
    }

    /// Canonical signature of `method`'s declared return type.
    ///
    /// Runtimes with an incompatible return-type accessor, or without
    /// return-type introspection, always yield `None`.
    pub fn return_type_signature(
        &self,
        method: &MethodHandle,
        suppress_nullable: bool,
    ) -> Option<String> {
        let caps = self.capabilities();
        if caps.legacy_return_accessor || !caps.return_types {
            return None;
        }

        let declared = method.return_type.as_ref()?;
        Some(self.render(declared, &method.declaring_type, suppress_nullable))
    }

    /// Render `descriptor` without nullable decoration.
    pub fn type_to_string(&self, descriptor: &TypeDescriptor, declaring_type: &str) -> String {
        type_to_string(descriptor, declaring_type, &self.keywords)
    }

    /// Whether `name` is a type keyword reserved by the host language.
    pub fn is_reserved_word(&self, name: &str) -> bool {
        keywords::is_reserved_word(name, &self.keywords)
    }

    /// Resolve every parameter of `method`, in order, plus its return type.
    pub fn method_signature(
        &self,
        method: &MethodHandle,
        suppress_nullable: bool,
    ) -> MethodSignature {
        let parameters = method
            .parameters
            .iter()
            .map(|param| ParameterSignature {
                name: param.name.clone(),
                position: param.position,
                signature: self.parameter_type_signature(param, suppress_nullable),
                is_array: self.is_array_type(param),
            })
            .collect();

        MethodSignature {
            name: method.name.clone(),
            declaring_type: method.declaring_type.clone(),
            parameters,
            return_type: self.return_type_signature(method, suppress_nullable),
        }
    }

    /// Resolve every method in `snapshot`, in order.
    pub fn snapshot_signatures(
        &self,
        snapshot: &IntrospectionSnapshot,
        suppress_nullable: bool,
    ) -> Vec<MethodSignature> {
        snapshot.methods.iter().map(|m| self.method_signature(m, suppress_nullable)).collect()
    }

    fn render(&self, descriptor: &TypeDescriptor, declaring_type: &str, suppress: bool) -> String {
        let base = type_to_string(descriptor, declaring_type, &self.keywords);
        nullable::decorate(
            base,
            descriptor.allows_null(),
            suppress,
            self.capabilities(),
            &self.keywords,
        )
    }
}

impl Default for SignatureResolver {
    fn default() -> Self { Self::new(RuntimeProfile::modern(), KeywordConfig::default()) }
}
