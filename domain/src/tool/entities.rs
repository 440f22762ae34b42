//! Tool domain entities

use serde::{Deserialize, Serialize};

/// Capability hints advertised to the calling agent.
///
/// Mirrors the annotation pair a tool-registration framework exposes:
/// `readOnlyHint` and `destructiveHint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ToolHints {
    /// The tool does not modify cluster state
    #[serde(rename = "readOnlyHint")]
    pub read_only: bool,
    /// The tool may irreversibly remove state
    #[serde(rename = "destructiveHint")]
    pub destructive: bool,
}

impl ToolHints {
    pub const READ_ONLY: Self = Self {
        read_only: true,
        destructive: false,
    };

    pub const MUTATING: Self = Self {
        read_only: false,
        destructive: false,
    };

    pub const DESTRUCTIVE: Self = Self {
        read_only: false,
        destructive: true,
    };

    pub fn as_str(&self) -> &str {
        match (self.read_only, self.destructive) {
            (true, _) => "read-only",
            (false, true) => "destructive",
            (false, false) => "mutating",
        }
    }
}

impl std::fmt::Display for ToolHints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Definition of a tool exposed to the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "k8s_get")
    pub name: String,
    /// Short human-readable title
    pub title: String,
    /// Human-readable description
    pub description: String,
    /// Free-form grouping tags (e.g., "k8s", "metrics")
    pub tags: Vec<String>,
    /// Capability hints
    pub hints: ToolHints,
    /// Parameter specifications
    pub parameters: Vec<ToolParameter>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Parameter type hint (e.g., "string", "integer", "boolean")
    pub param_type: String,
    /// Value used when the caller omits the parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        hints: ToolHints,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            description: description.into(),
            tags: vec!["k8s".to_string()],
            hints,
            parameters: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn is_read_only(&self) -> bool {
        self.hints.read_only
    }

    pub fn is_destructive(&self) -> bool {
        self.hints.destructive
    }

    pub fn parameter(&self, name: &str) -> Option<&ToolParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

impl ToolParameter {
    /// A required string parameter
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: true,
            param_type: "string".to_string(),
            default: None,
        }
    }

    /// An optional string parameter with no default
    pub fn optional(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            required: false,
            ..Self::required(name, description)
        }
    }

    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = param_type.into();
        self
    }

    pub fn with_default(mut self, default: impl Into<serde_json::Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// A call to a tool with JSON arguments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to call
    pub tool_name: String,
    /// Arguments passed to the tool
    #[serde(default)]
    pub arguments: serde_json::Map<String, serde_json::Value>,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: serde_json::Map::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Arguments as a JSON object, ready for typed decoding
    pub fn arguments_value(&self) -> serde_json::Value {
        serde_json::Value::Object(self.arguments.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints() {
        assert_eq!(ToolHints::READ_ONLY.as_str(), "read-only");
        assert_eq!(ToolHints::MUTATING.as_str(), "mutating");
        assert_eq!(ToolHints::DESTRUCTIVE.as_str(), "destructive");
    }

    #[test]
    fn test_hints_serialize_as_annotations() {
        let json = serde_json::to_value(ToolHints::DESTRUCTIVE).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"readOnlyHint": false, "destructiveHint": true})
        );
    }

    #[test]
    fn test_tool_definition() {
        let tool = ToolDefinition::new(
            "k8s_logs",
            "Get Kubernetes Pod Logs",
            "Get logs from a Kubernetes pod.",
            ToolHints::READ_ONLY,
        )
        .with_parameter(ToolParameter::required("pod_name", "The pod"))
        .with_parameter(
            ToolParameter::optional("num_lines", "Lines to fetch")
                .with_type("integer")
                .with_default(50),
        );

        assert_eq!(tool.name, "k8s_logs");
        assert!(tool.is_read_only());
        assert!(!tool.is_destructive());
        assert_eq!(tool.tags, vec!["k8s"]);
        assert_eq!(tool.parameters.len(), 2);
        assert!(tool.parameter("pod_name").unwrap().required);
        assert_eq!(
            tool.parameter("num_lines").unwrap().default,
            Some(serde_json::json!(50))
        );
    }

    #[test]
    fn test_tool_call() {
        let call = ToolCall::new("k8s_get")
            .with_arg("resource_type", "pods")
            .with_arg("all_namespaces", true);

        assert_eq!(call.tool_name, "k8s_get");
        assert_eq!(
            call.arguments_value(),
            serde_json::json!({"resource_type": "pods", "all_namespaces": true})
        );
    }
}
