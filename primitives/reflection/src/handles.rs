//! Parameter and method introspection handles.

use serde::{Deserialize, Serialize};

use crate::descriptor::TypeDescriptor;

/// What runtimes predating structured descriptors report about a parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyInfo {
    /// The parameter was declared with the primitive array type.
    #[serde(default)]
    pub is_array: bool,
    /// Free-text type hint (compatibility-mode runtimes only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_hint_text: Option<String>,
    /// Declared class name as read from the direct class accessor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Debug-formatted textual dump of the parameter.
    #[serde(default)]
    pub dump: String,
}

/// Parameter introspection handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterHandle {
    /// Parameter name, without any sigil
    pub name: String,
    /// Zero-based position in the parameter list
    #[serde(default)]
    pub position: usize,
    /// Declared type, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_type: Option<TypeDescriptor>,
    /// Qualified name of the type declaring the function this parameter belongs to
    pub declaring_type: String,
    /// Legacy type information
    #[serde(default)]
    pub legacy: LegacyInfo,
}

impl ParameterHandle {
    /// Create an untyped parameter declared in `declaring_type`.
    pub fn new(name: impl Into<String>, declaring_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: 0,
            declared_type: None,
            declaring_type: declaring_type.into(),
            legacy: LegacyInfo::default(),
        }
    }

    /// Set the declared type.
    pub fn with_type(mut self, declared_type: TypeDescriptor) -> Self {
        self.declared_type = Some(declared_type);
        self
    }

    /// Set the position in the parameter list.
    pub fn at_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    /// Set the legacy type information.
    pub fn with_legacy(mut self, legacy: LegacyInfo) -> Self {
        self.legacy = legacy;
        self
    }

    /// Whether a type was declared.
    pub fn has_type(&self) -> bool { self.declared_type.is_some() }
}

/// Method introspection handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodHandle {
    /// Method name
    pub name: String,
    /// Qualified name of the declaring type
    pub declaring_type: String,
    /// Parameters in declaration order
    #[serde(default)]
    pub parameters: Vec<ParameterHandle>,
    /// Declared return type, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeDescriptor>,
}

impl MethodHandle {
    /// Create a method without parameters or return type.
    pub fn new(name: impl Into<String>, declaring_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declaring_type: declaring_type.into(),
            parameters: Vec::new(),
            return_type: None,
        }
    }

    /// Append a parameter; its position is set to the next free slot.
    pub fn with_parameter(mut self, parameter: ParameterHandle) -> Self {
        let position = self.parameters.len();
        self.parameters.push(parameter.at_position(position));
        self
    }

    /// Set the declared return type.
    pub fn with_return_type(mut self, return_type: TypeDescriptor) -> Self {
        self.return_type = Some(return_type);
        self
    }

    /// Whether a return type was declared.
    pub fn has_return_type(&self) -> bool { self.return_type.is_some() }

    /// Get a parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&ParameterHandle> {
        self.parameters.iter().find(|p| p.name == name)
    }
}
