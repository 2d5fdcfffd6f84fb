#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Hintsmith Configuration
//!
//! This crate provides configuration management for Hintsmith.
//! It handles loading, saving, and managing configuration files that specify:
//! - The literal keywords and markers used when rendering signatures
//! - The runtime versions at which the introspection model changed
//! - Logging configuration
//!
//! Configuration is stored in TOML format. Every section has defaults, so a
//! partial file (or no file at all) yields a working configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use types::{GenerationThresholds, RuntimeVersion, VersionError};

/// Errors that can occur when loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to parse the TOML configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize configuration to TOML format
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// No configuration file exists at the requested path
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Could not locate the user's configuration directory
    #[error("Could not find user config directory")]
    ConfigDirUnavailable,
    /// A generation threshold is not a valid version string
    #[error("Invalid threshold '{field}': {source}")]
    InvalidThreshold {
        /// Name of the offending `[generations]` key
        field: &'static str,
        /// Underlying parse error
        source: VersionError,
    },
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Keywords and markers used when rendering signatures
    pub keywords: KeywordConfig,
    /// Runtime generation boundaries
    pub generations: GenerationConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Keywords and markers used when rendering signatures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Prefix anchoring a type name at the namespace root
    pub namespace_root: String,
    /// Name of the primitive array type
    pub array_type: String,
    /// Keyword meaning "the type this declaration appears in"
    pub self_keyword: String,
    /// Keyword meaning "whatever type implements this declaration"
    pub subclass_placeholder: String,
    /// Prefix marking a nullable type
    pub nullable_marker: String,
    /// Separator placed between union members
    pub union_separator: String,
    /// Scalar names reported by legacy free-text hints; these are discarded
    pub legacy_scalar_names: Vec<String>,
    /// Type keywords reserved by the host language
    pub reserved_words: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        let words = |list: &[&str]| list.iter().map(|w| w.to_string()).collect::<Vec<_>>();
        Self {
            namespace_root: "\\".to_string(),
            array_type: "array".to_string(),
            self_keyword: "self".to_string(),
            subclass_placeholder: "static".to_string(),
            nullable_marker: "?".to_string(),
            union_separator: "|".to_string(),
            legacy_scalar_names: words(&["int", "integer", "float", "string", "bool", "boolean"]),
            reserved_words: words(&[
                "bool", "int", "float", "string", "array", "callable", "iterable", "object",
                "mixed", "void", "null", "self", "static", "parent",
            ]),
        }
    }
}

/// Runtime versions at which the introspection model changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// First version with structured type descriptors (e.g. "7.0.0")
    pub structured_types: String,
    /// First version with nullable markers (e.g. "7.1.0")
    pub nullable_markers: String,
    /// First version with return-type descriptors (e.g. "7.0.0")
    pub return_types: String,
    /// First point release with a defective class accessor (e.g. "5.4.0")
    pub class_accessor_defect_from: String,
    /// First point release after the defective range (e.g. "5.5.0")
    pub class_accessor_defect_until: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        let defaults = GenerationThresholds::default();
        Self {
            structured_types: defaults.structured_types.to_string(),
            nullable_markers: defaults.nullable_markers.to_string(),
            return_types: defaults.return_types.to_string(),
            class_accessor_defect_from: defaults.class_accessor_defect_from.to_string(),
            class_accessor_defect_until: defaults.class_accessor_defect_until.to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log file path (optional)
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self { Self { level: "info".to_string(), file: None } }
}

impl GenerationConfig {
    /// Parse the configured version strings into thresholds.
    pub fn thresholds(&self) -> Result<GenerationThresholds, ConfigError> {
        let parse = |field: &'static str, value: &str| {
            RuntimeVersion::from_string(value)
                .map_err(|source| ConfigError::InvalidThreshold { field, source })
        };
        Ok(GenerationThresholds {
            structured_types: parse("structured_types", &self.structured_types)?,
            nullable_markers: parse("nullable_markers", &self.nullable_markers)?,
            return_types: parse("return_types", &self.return_types)?,
            class_accessor_defect_from: parse(
                "class_accessor_defect_from",
                &self.class_accessor_defect_from,
            )?,
            class_accessor_defect_until: parse(
                "class_accessor_defect_until",
                &self.class_accessor_defect_until,
            )?,
        })
    }
}

impl Config {
    /// Load configuration from a TOML file at `path`
    ///
    /// Unlike [`Config::load_or_default`], a missing file is an error.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save this configuration as a pretty-printed TOML file at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Returns the default config file path:
    /// `{config_dir()}/hintsmith/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir =
            dirs::config_dir().ok_or(ConfigError::ConfigDirUnavailable)?.join("hintsmith");
        Ok(config_dir.join("config.toml"))
    }

    /// Load the configuration at [`Config::default_path`], or the defaults if no file exists there
    pub fn discover() -> Result<Self, ConfigError> {
        Self::load_or_default(&Self::default_path()?)
    }

    /// Load the configuration at `path`, or the defaults if no file exists there
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse the `[generations]` section into thresholds.
    pub fn thresholds(&self) -> Result<GenerationThresholds, ConfigError> {
        self.generations.thresholds()
    }
}
