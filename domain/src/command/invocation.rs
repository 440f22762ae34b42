//! Command invocation: the resolved external-process call

use serde::{Deserialize, Serialize};

/// Ordered argument tokens for one operation, plus an optional stdin payload.
///
/// Built with explicit appends only. The conditional helpers skip absent
/// and empty values, so no blank token can ever reach the process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandArgs {
    tokens: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<String>,
}

impl CommandArgs {
    /// Start from a fixed subcommand path, e.g. `["rollout", "restart"]`
    pub fn new<I, S>(subcommand: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: subcommand.into_iter().map(Into::into).collect(),
            input: None,
        }
    }

    /// Append one token unconditionally
    pub fn arg(mut self, token: impl Into<String>) -> Self {
        self.tokens.push(token.into());
        self
    }

    /// Append a value only when it is present and non-empty
    pub fn arg_opt(mut self, token: Option<&str>) -> Self {
        if let Some(t) = present(token) {
            self.tokens.push(t.to_string());
        }
        self
    }

    /// Append `flag` only when `enabled`
    pub fn flag(mut self, flag: &str, enabled: bool) -> Self {
        if enabled {
            self.tokens.push(flag.to_string());
        }
        self
    }

    /// Append `flag value` as two tokens when the value is present and non-empty
    pub fn option(mut self, flag: &str, value: Option<&str>) -> Self {
        if let Some(v) = present(value) {
            self.tokens.push(flag.to_string());
            self.tokens.push(v.to_string());
        }
        self
    }

    /// Append whitespace-separated words as individual tokens
    pub fn words(mut self, text: &str) -> Self {
        self.tokens
            .extend(text.split_whitespace().map(|w| w.to_string()));
        self
    }

    /// Route a payload through the process's standard input
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    pub fn into_parts(self) -> (Vec<String>, Option<String>) {
        (self.tokens, self.input)
    }
}

/// Treat empty or whitespace-only strings as absent
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// A fully resolved process invocation: program, arguments, stdin payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Program to execute (looked up on `PATH`)
    pub program: String,
    /// Argument tokens, in order
    pub args: Vec<String>,
    /// Text written to stdin before it is closed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            input: None,
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn with_input(mut self, input: Option<String>) -> Self {
        self.input = input;
        self
    }

    /// Build the invocation for `program`, prefixing `global_args`.
    pub fn from_parts(program: &str, global_args: &[String], command: CommandArgs) -> Self {
        let (tokens, input) = command.into_parts();
        Self::new(program)
            .args(global_args.iter().cloned())
            .args(tokens)
            .with_input(input)
    }

    /// Space-joined rendering for logs; never executed through a shell.
    pub fn display_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(|a| a.as_str()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_empty_values_add_no_tokens() {
        let args = CommandArgs::new(["get", "pods"])
            .arg_opt(None)
            .arg_opt(Some(""))
            .option("-n", None)
            .option("-o", Some("  "))
            .flag("-A", false);

        assert_eq!(args.tokens(), ["get", "pods"]);
    }

    #[test]
    fn test_present_values_add_tokens_in_order() {
        let args = CommandArgs::new(["get", "pods"])
            .arg_opt(Some("web"))
            .option("-n", Some("prod"))
            .flag("-A", true);

        assert_eq!(args.tokens(), ["get", "pods", "web", "-n", "prod", "-A"]);
    }

    #[test]
    fn test_words_splits_on_any_whitespace() {
        let args = CommandArgs::new(["exec", "web"]).arg("--").words("  ls   -la\t/tmp ");
        assert_eq!(args.tokens(), ["exec", "web", "--", "ls", "-la", "/tmp"]);
    }

    #[test]
    fn test_from_parts_prefixes_global_args() {
        let command = CommandArgs::new(["apply", "-f", "-"]).with_input("kind: Pod");
        let spec = CommandSpec::from_parts(
            "kubectl",
            &["--context".to_string(), "dev".to_string()],
            command,
        );

        assert_eq!(spec.program, "kubectl");
        assert_eq!(spec.args, ["--context", "dev", "apply", "-f", "-"]);
        assert_eq!(spec.input.as_deref(), Some("kind: Pod"));
        assert_eq!(spec.display_line(), "kubectl --context dev apply -f -");
    }
}
