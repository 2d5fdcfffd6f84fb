//! Resolved signature summaries handed to the stand-in generator.

use serde::{Deserialize, Serialize};

/// A parameter's resolved signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSignature {
    /// Parameter name
    pub name: String,
    /// Zero-based position in the parameter list
    pub position: usize,
    /// Canonical type signature, or `None` when no type is declared
    pub signature: Option<String>,
    /// Whether the declared type is exactly the primitive array type
    pub is_array: bool,
}

/// A method's resolved parameter and return signatures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSignature {
    /// Method name
    pub name: String,
    /// Qualified name of the declaring type
    pub declaring_type: String,
    /// Parameters in declaration order
    pub parameters: Vec<ParameterSignature>,
    /// Canonical return signature, or `None` when no return type is available
    pub return_type: Option<String>,
}
