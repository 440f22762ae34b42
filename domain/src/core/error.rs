//! Domain error types

use thiserror::Error;

/// Pre-execution rejection of an operation's parameters.
///
/// Raised before any process is spawned. An execution failure (the binary
/// ran and exited non-zero) is never a `ValidationError`; it is reported
/// through [`ToolOutput`](crate::tool::ToolOutput) instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{parameter} is required")]
    MissingParameter { parameter: String },

    #[error("{parameter} must be {}, got: {value}", format_allowed(.allowed))]
    InvalidValue {
        parameter: String,
        value: String,
        allowed: Vec<String>,
    },

    #[error("{first} and {second} are mutually exclusive")]
    MutuallyExclusive { first: String, second: String },

    #[error("Invalid arguments for {operation}: {message}")]
    InvalidArguments { operation: String, message: String },
}

impl ValidationError {
    pub fn missing(parameter: impl Into<String>) -> Self {
        Self::MissingParameter {
            parameter: parameter.into(),
        }
    }

    pub fn invalid_value(
        parameter: impl Into<String>,
        value: impl Into<String>,
        allowed: &[&str],
    ) -> Self {
        Self::InvalidValue {
            parameter: parameter.into(),
            value: value.into(),
            allowed: allowed.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn mutually_exclusive(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::MutuallyExclusive {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Name of the offending parameter, when the error is about a single one.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::MissingParameter { parameter } | Self::InvalidValue { parameter, .. } => {
                Some(parameter)
            }
            _ => None,
        }
    }
}

/// `'a'`, `'a' or 'b'`, `'a', 'b' or 'c'`
fn format_allowed(allowed: &[String]) -> String {
    let quoted: Vec<String> = allowed.iter().map(|v| format!("'{}'", v)).collect();
    match quoted.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_display() {
        let error = ValidationError::missing("resource_type");
        assert_eq!(error.to_string(), "resource_type is required");
        assert_eq!(error.parameter(), Some("resource_type"));
    }

    #[test]
    fn test_invalid_value_display_lists_allowed_values() {
        let error = ValidationError::invalid_value("sort_by", "disk", &["cpu", "memory"]);
        assert_eq!(
            error.to_string(),
            "sort_by must be 'cpu' or 'memory', got: disk"
        );

        let error =
            ValidationError::invalid_value("patch_type", "xml", &["strategic", "merge", "json"]);
        assert_eq!(
            error.to_string(),
            "patch_type must be 'strategic', 'merge' or 'json', got: xml"
        );
    }

    #[test]
    fn test_mutually_exclusive_display() {
        let error = ValidationError::mutually_exclusive("namespace", "all_namespaces");
        assert_eq!(
            error.to_string(),
            "namespace and all_namespaces are mutually exclusive"
        );
        assert!(error.parameter().is_none());
    }
}
