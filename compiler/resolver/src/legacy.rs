//! Legacy type resolution.
//!
//! Runtimes predating structured descriptors report parameter types through a
//! handful of older accessors. Resolution here never fails: anything that
//! cannot be read degrades to "no type".

use std::sync::OnceLock;

use config::KeywordConfig;
use reflection::ParameterHandle;
use regex::Regex;
use types::Capabilities;

use crate::keywords::{is_legacy_scalar, qualify_reference};
use crate::strategy::ResolutionStrategy;

/// Outcome of the legacy resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegacyResolution {
    /// The final signature.
    Resolved(String),
    /// A legacy path applies but yields no usable type.
    NoType,
    /// No legacy path applies; use structured resolution.
    NotApplicable,
}

impl LegacyResolution {
    /// Collapse into the public `Option<String>` shape.
    ///
    /// `NotApplicable` also maps to `None`; callers check it before collapsing.
    pub fn into_signature(self) -> Option<String> {
        match self {
            LegacyResolution::Resolved(signature) => Some(signature),
            LegacyResolution::NoType | LegacyResolution::NotApplicable => None,
        }
    }
}

/// Resolve `param` through whichever legacy accessor `strategy` names.
pub fn resolve(
    strategy: ResolutionStrategy,
    param: &ParameterHandle,
    capabilities: &Capabilities,
    keywords: &KeywordConfig,
) -> LegacyResolution {
    match strategy {
        ResolutionStrategy::LegacyArray => LegacyResolution::Resolved(keywords.array_type.clone()),
        ResolutionStrategy::LegacyTextHint => from_text_hint(param, keywords),
        ResolutionStrategy::LegacyClassAccessor => {
            from_class_accessor(param, capabilities, keywords)
        }
        ResolutionStrategy::Structured => LegacyResolution::NotApplicable,
    }
}

/// Scalar hints from free-text runtimes are unreliable and are dropped.
fn from_text_hint(param: &ParameterHandle, keywords: &KeywordConfig) -> LegacyResolution {
    match param.legacy.type_hint_text.as_deref().map(str::trim) {
        Some(hint) if !hint.is_empty() && !is_legacy_scalar(hint, keywords) => {
            LegacyResolution::Resolved(qualify_reference(hint, &param.declaring_type, keywords))
        }
        _ => LegacyResolution::NoType,
    }
}

fn from_class_accessor(
    param: &ParameterHandle,
    capabilities: &Capabilities,
    keywords: &KeywordConfig,
) -> LegacyResolution {
    let from_dump = if capabilities.class_accessor_defect {
        let hinted = hint_from_dump(&param.legacy.dump);
        if hinted.is_none() {
            tracing::debug!(
                parameter = %param.name,
                "no type hint in parameter dump, falling back to class accessor"
            );
        }
        hinted
    } else {
        None
    };

    let name = from_dump.or_else(|| {
        let class_name = param.legacy.class_name.as_deref().map(str::trim);
        class_name.filter(|n| !n.is_empty()).map(String::from)
    });

    match name {
        Some(name) => {
            LegacyResolution::Resolved(qualify_reference(&name, &param.declaring_type, keywords))
        }
        None => LegacyResolution::NoType,
    }
}

fn dump_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\[\s<\w+?>\s([\w\\]+)").ok()).as_ref()
}

/// Extract the hinted type name from a parameter dump such as
/// `Parameter #0 [ <required> Foo\Bar $baz ]`.
pub fn hint_from_dump(dump: &str) -> Option<String> {
    dump_pattern()?.captures(dump).and_then(|caps| caps.get(1)).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use reflection::LegacyInfo;

    use super::*;

    fn param(legacy: LegacyInfo) -> ParameterHandle {
        ParameterHandle::new("value", "App\\Legacy").with_legacy(legacy)
    }

    #[test]
    fn test_hint_from_dump() {
        assert_eq!(
            hint_from_dump("Parameter #0 [ <required> Foo\\Bar $baz ]"),
            Some("Foo\\Bar".to_string())
        );
        assert_eq!(
            hint_from_dump("Parameter #1 [ <optional> Foo or NULL $baz = NULL ]"),
            Some("Foo".to_string())
        );
        assert_eq!(hint_from_dump("Parameter #0 [ <required> $baz ]"), None);
        assert_eq!(hint_from_dump(""), None);
    }

    #[test]
    fn test_array_strategy() {
        let keywords = KeywordConfig::default();
        let out = resolve(
            ResolutionStrategy::LegacyArray,
            &param(LegacyInfo { is_array: true, ..LegacyInfo::default() }),
            &Capabilities::default(),
            &keywords,
        );
        assert_eq!(out, LegacyResolution::Resolved("array".to_string()));
    }

    #[test]
    fn test_text_hint_discards_scalars() {
        let keywords = KeywordConfig::default();
        for scalar in ["int", "integer", "float", "string", "bool", "boolean"] {
            let p = param(LegacyInfo {
                type_hint_text: Some(scalar.to_string()),
                ..LegacyInfo::default()
            });
            let caps = Capabilities::default();
            let out = resolve(ResolutionStrategy::LegacyTextHint, &p, &caps, &keywords);
            assert_eq!(out, LegacyResolution::NoType, "scalar {} should be dropped", scalar);
        }
    }

    #[test]
    fn test_text_hint_keeps_capitalised_class_names() {
        let keywords = KeywordConfig::default();
        let caps = Capabilities::default();
        for (hint, expected) in [("Boolean", "\\Boolean"), ("String", "\\String")] {
            let p = param(LegacyInfo {
                type_hint_text: Some(hint.to_string()),
                ..LegacyInfo::default()
            });
            let out = resolve(ResolutionStrategy::LegacyTextHint, &p, &caps, &keywords);
            assert_eq!(out, LegacyResolution::Resolved(expected.to_string()));
        }
    }

    #[test]
    fn test_text_hint_substitutes_self() {
        let keywords = KeywordConfig::default();
        let p = param(LegacyInfo {
            type_hint_text: Some("self".to_string()),
            ..LegacyInfo::default()
        });
        let out =
            resolve(ResolutionStrategy::LegacyTextHint, &p, &Capabilities::default(), &keywords);
        assert_eq!(out, LegacyResolution::Resolved("\\App\\Legacy".to_string()));
    }

    #[test]
    fn test_text_hint_qualifies_classes() {
        let keywords = KeywordConfig::default();
        let p = param(LegacyInfo {
            type_hint_text: Some("Vendor\\Thing".to_string()),
            ..LegacyInfo::default()
        });
        let out =
            resolve(ResolutionStrategy::LegacyTextHint, &p, &Capabilities::default(), &keywords);
        assert_eq!(out, LegacyResolution::Resolved("\\Vendor\\Thing".to_string()));
    }

    #[test]
    fn test_text_hint_missing_or_blank() {
        let keywords = KeywordConfig::default();
        let caps = Capabilities::default();
        let missing = param(LegacyInfo::default());
        let blank =
            param(LegacyInfo { type_hint_text: Some("  ".to_string()), ..LegacyInfo::default() });
        assert_eq!(
            resolve(ResolutionStrategy::LegacyTextHint, &missing, &caps, &keywords),
            LegacyResolution::NoType
        );
        assert_eq!(
            resolve(ResolutionStrategy::LegacyTextHint, &blank, &caps, &keywords),
            LegacyResolution::NoType
        );
    }

    #[test]
    fn test_class_accessor_reads_class_name() {
        let keywords = KeywordConfig::default();
        let p = param(LegacyInfo {
            class_name: Some("Vendor\\Thing".to_string()),
            dump: "Parameter #0 [ <required> Other\\Thing $value ]".to_string(),
            ..LegacyInfo::default()
        });
        let out = resolve(
            ResolutionStrategy::LegacyClassAccessor,
            &p,
            &Capabilities::default(),
            &keywords,
        );
        assert_eq!(out, LegacyResolution::Resolved("\\Vendor\\Thing".to_string()));
    }

    #[test]
    fn test_defective_release_prefers_dump() {
        let keywords = KeywordConfig::default();
        let caps = Capabilities { class_accessor_defect: true, ..Capabilities::default() };
        let p = param(LegacyInfo {
            class_name: Some("Wrong\\Thing".to_string()),
            dump: "Parameter #0 [ <required> Right\\Thing $value ]".to_string(),
            ..LegacyInfo::default()
        });
        let out = resolve(ResolutionStrategy::LegacyClassAccessor, &p, &caps, &keywords);
        assert_eq!(out, LegacyResolution::Resolved("\\Right\\Thing".to_string()));
    }

    #[test]
    fn test_defective_release_falls_back_when_dump_has_no_hint() {
        let keywords = KeywordConfig::default();
        let caps = Capabilities { class_accessor_defect: true, ..Capabilities::default() };
        let p = param(LegacyInfo {
            class_name: Some("Vendor\\Thing".to_string()),
            dump: "Parameter #0 [ <required> $value ]".to_string(),
            ..LegacyInfo::default()
        });
        let out = resolve(ResolutionStrategy::LegacyClassAccessor, &p, &caps, &keywords);
        assert_eq!(out, LegacyResolution::Resolved("\\Vendor\\Thing".to_string()));
    }

    #[test]
    fn test_defective_release_dump_substitutes_self() {
        let keywords = KeywordConfig::default();
        let caps = Capabilities { class_accessor_defect: true, ..Capabilities::default() };
        let p = param(LegacyInfo {
            dump: "Parameter #0 [ <required> self $other ]".to_string(),
            ..LegacyInfo::default()
        });
        let out = resolve(ResolutionStrategy::LegacyClassAccessor, &p, &caps, &keywords);
        assert_eq!(out, LegacyResolution::Resolved("\\App\\Legacy".to_string()));
    }

    #[test]
    fn test_class_accessor_without_class_is_no_type() {
        let keywords = KeywordConfig::default();
        let out = resolve(
            ResolutionStrategy::LegacyClassAccessor,
            &param(LegacyInfo::default()),
            &Capabilities::default(),
            &keywords,
        );
        assert_eq!(out, LegacyResolution::NoType);
        assert_eq!(out.into_signature(), None);
    }

    #[test]
    fn test_structured_is_not_applicable() {
        let out = resolve(
            ResolutionStrategy::Structured,
            &param(LegacyInfo::default()),
            &Capabilities::modern(),
            &KeywordConfig::default(),
        );
        assert_eq!(out, LegacyResolution::NotApplicable);
    }
}
