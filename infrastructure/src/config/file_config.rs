//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file:
//!
//! ```toml
//! [kubectl]
//! binary = "kubectl"
//! kubeconfig = "~/.kube/staging.yaml"
//! context = "staging"
//!
//! [output]
//! format = "json"
//! color = false
//! ```

use kubecall_application::KubectlSettings;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("kubectl.binary cannot be empty")]
    EmptyBinary,
}

/// Raw kubectl configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileKubectlConfig {
    /// Program name or path
    pub binary: String,
    /// Kubeconfig file passed as `--kubeconfig`
    pub kubeconfig: Option<String>,
    /// Context passed as `--context`
    pub context: Option<String>,
}

impl Default for FileKubectlConfig {
    fn default() -> Self {
        let defaults = KubectlSettings::default();
        Self {
            binary: defaults.binary,
            kubeconfig: defaults.kubeconfig,
            context: defaults.context,
        }
    }
}

/// How results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain output text
    #[default]
    Text,
    /// The `{"output": ..., "error": ...}` record
    Json,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub kubectl: FileKubectlConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.kubectl.binary.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBinary);
        }
        Ok(())
    }

    /// Settings for the execution use case
    pub fn kubectl_settings(&self) -> KubectlSettings {
        KubectlSettings {
            binary: self.kubectl.binary.clone(),
            kubeconfig: self.kubectl.kubeconfig.clone(),
            context: self.kubectl.context.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[kubectl]
binary = "/opt/k8s/bin/kubectl"
kubeconfig = "/etc/kube/admin.conf"
context = "staging"

[output]
format = "json"
color = false
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.kubectl.binary, "/opt/k8s/bin/kubectl");
        assert_eq!(config.kubectl.kubeconfig.as_deref(), Some("/etc/kube/admin.conf"));
        assert_eq!(config.kubectl.context.as_deref(), Some("staging"));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.color);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: FileConfig = toml::from_str("[kubectl]\ncontext = \"dev\"\n").unwrap();
        assert_eq!(config.kubectl.binary, "kubectl");
        assert_eq!(config.kubectl.context.as_deref(), Some("dev"));
        assert_eq!(config.output, FileOutputConfig::default());
    }

    #[test]
    fn test_validate_rejects_empty_binary() {
        let mut config = FileConfig::default();
        assert!(config.validate().is_ok());

        config.kubectl.binary = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyBinary));
    }

    #[test]
    fn test_kubectl_settings() {
        let mut config = FileConfig::default();
        config.kubectl.context = Some("prod".to_string());
        let settings = config.kubectl_settings();
        assert_eq!(settings.binary, "kubectl");
        assert_eq!(settings.global_args(), ["--context", "prod"]);
    }
}
