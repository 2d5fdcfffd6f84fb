//! End-to-end resolution of captured snapshots.

use reflection::{IntrospectionSnapshot, LegacyInfo, MethodHandle, ParameterHandle, TypeDescriptor};
use resolver::{Config, MethodSignature, ParameterSignature, SignatureResolver};
use tempfile::TempDir;
use types::{GenerationThresholds, RuntimeFlavor, RuntimeProfile, RuntimeVersion};

const REPOSITORY: &str = "App\\Repository\\UserRepository";

fn repository_snapshot(profile: RuntimeProfile) -> IntrospectionSnapshot {
    let find = MethodHandle::new("find", REPOSITORY)
        .with_parameter(
            ParameterHandle::new("id", REPOSITORY).with_type(TypeDescriptor::builtin("int")),
        )
        .with_parameter(
            ParameterHandle::new("criteria", REPOSITORY)
                .with_type(TypeDescriptor::builtin("array"))
                .with_legacy(LegacyInfo { is_array: true, ..LegacyInfo::default() }),
        )
        .with_return_type(TypeDescriptor::named("App\\Entity\\User").nullable());

    let with_cache = MethodHandle::new("withCache", REPOSITORY)
        .with_parameter(ParameterHandle::new("cache", REPOSITORY).with_type(
            TypeDescriptor::union(vec![
                TypeDescriptor::named("Psr\\Cache\\CacheItemPoolInterface"),
                TypeDescriptor::named("self"),
            ]),
        ))
        .with_return_type(TypeDescriptor::named("static"));

    let untyped = MethodHandle::new("legacyHook", REPOSITORY)
        .with_parameter(ParameterHandle::new("payload", REPOSITORY));

    IntrospectionSnapshot::new(profile, vec![find, with_cache, untyped])
}

#[test]
fn test_resolves_snapshot_loaded_from_disk() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("repository.json");
    repository_snapshot(RuntimeProfile::modern()).to_file(&path).expect("save snapshot");

    let snapshot = IntrospectionSnapshot::from_file(&path).expect("load snapshot");
    let resolver = SignatureResolver::for_snapshot(&snapshot, &Config::default());
    let signatures = resolver.snapshot_signatures(&snapshot, false);

    assert_eq!(
        signatures[0],
        MethodSignature {
            name: "find".to_string(),
            declaring_type: REPOSITORY.to_string(),
            parameters: vec![
                ParameterSignature {
                    name: "id".to_string(),
                    position: 0,
                    signature: Some("int".to_string()),
                    is_array: false,
                },
                ParameterSignature {
                    name: "criteria".to_string(),
                    position: 1,
                    signature: Some("array".to_string()),
                    is_array: true,
                },
            ],
            return_type: Some("?\\App\\Entity\\User".to_string()),
        }
    );

    assert_eq!(
        signatures[1].parameters[0].signature.as_deref(),
        Some("\\Psr\\Cache\\CacheItemPoolInterface|\\App\\Repository\\UserRepository")
    );
    assert_eq!(signatures[1].return_type.as_deref(), Some("static"));

    assert_eq!(signatures[2].parameters[0].signature, None);
    assert_eq!(signatures[2].return_type, None);
}

#[test]
fn test_suppressed_nullable_snapshot() {
    let snapshot = repository_snapshot(RuntimeProfile::modern());
    let resolver = SignatureResolver::for_snapshot(&snapshot, &Config::default());
    let find = resolver.method_signature(&snapshot.methods[0], true);
    assert_eq!(find.return_type.as_deref(), Some("\\App\\Entity\\User"));
}

#[test]
fn test_keywords_from_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "[keywords]\nunion_separator = \" | \"\n").expect("write config");
    let config = Config::from_file(&config_path).expect("load config");

    let snapshot = repository_snapshot(RuntimeProfile::modern());
    let resolver = SignatureResolver::for_snapshot(&snapshot, &config);
    let with_cache = resolver.method_signature(&snapshot.methods[1], false);
    assert_eq!(
        with_cache.parameters[0].signature.as_deref(),
        Some("\\Psr\\Cache\\CacheItemPoolInterface | \\App\\Repository\\UserRepository")
    );
}

#[test]
fn test_same_snapshot_on_pre_structured_runtime() {
    let profile = RuntimeProfile::detect(
        RuntimeFlavor::Reference,
        RuntimeVersion::new(5, 6, 40),
        &GenerationThresholds::default(),
    );
    let snapshot = repository_snapshot(profile);
    let resolver = SignatureResolver::for_snapshot(&snapshot, &Config::default());
    let signatures = resolver.snapshot_signatures(&snapshot, false);

    // Only the legacy array flag survives; structured descriptors are not consulted.
    assert_eq!(signatures[0].parameters[0].signature, None);
    assert_eq!(signatures[0].parameters[1].signature.as_deref(), Some("array"));
    assert!(signatures[0].parameters[1].is_array);
    assert_eq!(signatures[0].return_type, None);
}

#[test]
fn test_signatures_serialize_for_the_generator() {
    let snapshot = repository_snapshot(RuntimeProfile::modern());
    let resolver = SignatureResolver::default();
    let json = serde_json::to_value(resolver.snapshot_signatures(&snapshot, false))
        .expect("signatures should serialize");
    assert_eq!(json[0]["return_type"], "?\\App\\Entity\\User");
    assert_eq!(json[2]["parameters"][0]["signature"], serde_json::Value::Null);
}
