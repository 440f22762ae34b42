//! Tool domain value objects: the uniform result record
//!
//! Every operation, whatever it does internally, answers with a
//! [`ToolOutput`]. A failed execution is still a `ToolOutput` (with
//! `error: true`); only parameter validation is reported out of band.

use serde::{Deserialize, Serialize};

/// Uniform two-field result of an operation.
///
/// Serializes to exactly `{"output": "...", "error": false}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToolOutput {
    /// Text payload (stdout on success, diagnostics on failure)
    pub output: String,
    /// Whether the operation failed
    pub error: bool,
}

impl ToolOutput {
    /// Create a successful result
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            error: false,
        }
    }

    /// Create a failed result
    pub fn failure(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            error: true,
        }
    }

    /// Check if execution was successful
    pub fn is_success(&self) -> bool {
        !self.error
    }
}

impl std::fmt::Display for ToolOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_output_success() {
        let result = ToolOutput::success("pod/web created");

        assert!(result.is_success());
        assert_eq!(result.output, "pod/web created");
    }

    #[test]
    fn test_tool_output_failure() {
        let result = ToolOutput::failure("Error from server (NotFound)");

        assert!(!result.is_success());
        assert!(result.error);
    }

    #[test]
    fn test_tool_output_wire_shape() {
        let json = serde_json::to_value(ToolOutput::success("ok")).unwrap();
        assert_eq!(json, serde_json::json!({"output": "ok", "error": false}));
    }
}
