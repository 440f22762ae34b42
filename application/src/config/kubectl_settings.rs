//! kubectl invocation settings
//!
//! [`KubectlSettings`] carries what every spawned command shares: the
//! binary to run and the cluster selection flags placed ahead of the
//! operation's own tokens.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BINARY: &str = "kubectl";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubectlSettings {
    /// Program name or path
    pub binary: String,
    /// Passed as `--kubeconfig <path>`
    pub kubeconfig: Option<String>,
    /// Passed as `--context <name>`
    pub context: Option<String>,
}

impl Default for KubectlSettings {
    fn default() -> Self {
        Self {
            binary: DEFAULT_BINARY.to_string(),
            kubeconfig: None,
            context: None,
        }
    }
}

impl KubectlSettings {
    // ==================== Builder Methods ====================

    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn with_kubeconfig(mut self, path: impl Into<String>) -> Self {
        self.kubeconfig = Some(path.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Tokens prepended to every command, kubeconfig first
    pub fn global_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(path) = self.kubeconfig.as_deref().filter(|p| !p.trim().is_empty()) {
            args.push("--kubeconfig".to_string());
            args.push(path.to_string());
        }
        if let Some(ctx) = self.context.as_deref().filter(|c| !c.trim().is_empty()) {
            args.push("--context".to_string());
            args.push(ctx.to_string());
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_global_args() {
        let settings = KubectlSettings::default();
        assert_eq!(settings.binary, "kubectl");
        assert!(settings.global_args().is_empty());
    }

    #[test]
    fn test_global_args_order() {
        let settings = KubectlSettings::default()
            .with_context("staging")
            .with_kubeconfig("/tmp/kube.yaml");
        assert_eq!(
            settings.global_args(),
            ["--kubeconfig", "/tmp/kube.yaml", "--context", "staging"]
        );
    }

    #[test]
    fn test_blank_values_are_skipped() {
        let settings = KubectlSettings::default().with_context("  ");
        assert!(settings.global_args().is_empty());
    }
}
