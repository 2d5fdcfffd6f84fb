//! Introspection snapshots.
//!
//! A snapshot is what a host-side probe writes out after reflecting over a
//! type: the runtime it ran on and every method it saw.

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use types::RuntimeProfile;

use crate::handles::MethodHandle;

/// Errors that can occur when reading or writing snapshots.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Failed to read or write the snapshot file
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// Snapshot contents were not valid JSON for the expected shape
    #[error("Invalid snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Methods captured from one type, together with the runtime they were captured on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntrospectionSnapshot {
    /// Runtime the snapshot was captured on
    pub profile: RuntimeProfile,
    /// Captured methods in declaration order
    #[serde(default)]
    pub methods: Vec<MethodHandle>,
}

impl IntrospectionSnapshot {
    /// Create a snapshot for `profile` with the given methods.
    pub fn new(profile: RuntimeProfile, methods: Vec<MethodHandle>) -> Self {
        Self { profile, methods }
    }

    /// Load a snapshot from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path)?;
        let snapshot: Self = serde_json::from_str(&content)?;
        Ok(snapshot)
    }

    /// Save the snapshot to a JSON file with pretty formatting
    pub fn to_file(&self, path: &Path) -> Result<(), SnapshotError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(&mut file, self)?;
        writeln!(file)?;
        Ok(())
    }

    /// Get a method by name
    pub fn find_method(&self, name: &str) -> Option<&MethodHandle> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Total number of captured parameters across all methods
    pub fn parameter_count(&self) -> usize { self.methods.iter().map(|m| m.parameters.len()).sum() }
}
