//! Raw process outcomes and their normalization into [`ToolOutput`].

use crate::tool::ToolOutput;
use serde::{Deserialize, Serialize};

/// What the process runner observed for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProcessOutcome {
    /// The process ran to termination.
    Exited {
        program: String,
        /// Exit code; `None` when the process was terminated by a signal
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
    /// The process could not be started (binary missing, permission denied, ...)
    SpawnFailed { program: String, message: String },
}

impl ProcessOutcome {
    pub fn exited(
        program: impl Into<String>,
        code: Option<i32>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::Exited {
            program: program.into(),
            code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn spawn_failed(program: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SpawnFailed {
            program: program.into(),
            message: message.into(),
        }
    }

    /// Exit code, when the process exited normally
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Exited { code, .. } => *code,
            Self::SpawnFailed { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code() == Some(0)
    }
}

/// Collapse a [`ProcessOutcome`] into the uniform [`ToolOutput`].
///
/// Total and pure: every outcome maps to exactly one output.
///
/// | Outcome | `output` | `error` |
/// |---------|----------|---------|
/// | exit 0 | stdout | false |
/// | exit ≠ 0, stderr non-empty | stderr | true |
/// | exit ≠ 0, stderr empty | `"<program> exited with code N"` + stdout | true |
/// | signal | stderr, or `"<program> terminated by signal"` + stdout | true |
/// | spawn failure | `"Failed to execute <program>: <reason>"` | true |
///
/// Trailing newlines are trimmed from whichever stream is relayed.
pub fn normalize(outcome: &ProcessOutcome) -> ToolOutput {
    match outcome {
        ProcessOutcome::Exited {
            code: Some(0),
            stdout,
            ..
        } => ToolOutput::success(trim_trailing_newlines(stdout)),
        ProcessOutcome::Exited {
            program,
            code,
            stdout,
            stderr,
        } => {
            let stderr = trim_trailing_newlines(stderr);
            if !stderr.trim().is_empty() {
                return ToolOutput::failure(stderr);
            }

            let mut message = match code {
                Some(code) => format!("{} exited with code {}", program, code),
                None => format!("{} terminated by signal", program),
            };
            let stdout = trim_trailing_newlines(stdout);
            if !stdout.trim().is_empty() {
                message.push('\n');
                message.push_str(stdout);
            }
            ToolOutput::failure(message)
        }
        ProcessOutcome::SpawnFailed { program, message } => {
            ToolOutput::failure(format!("Failed to execute {}: {}", program, message))
        }
    }
}

fn trim_trailing_newlines(s: &str) -> &str {
    s.trim_end_matches(['\n', '\r'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_relays_stdout() {
        let outcome = ProcessOutcome::exited("kubectl", Some(0), "ok\n", "");
        assert_eq!(normalize(&outcome), ToolOutput::success("ok"));
    }

    #[test]
    fn test_success_keeps_inner_newlines_and_ignores_stderr() {
        let outcome = ProcessOutcome::exited(
            "kubectl",
            Some(0),
            "NAME   READY\nweb    1/1\n\n",
            "Warning: deprecated\n",
        );
        assert_eq!(
            normalize(&outcome),
            ToolOutput::success("NAME   READY\nweb    1/1")
        );
    }

    #[test]
    fn test_failure_relays_stderr() {
        let outcome = ProcessOutcome::exited("kubectl", Some(1), "", "denied\n");
        assert_eq!(normalize(&outcome), ToolOutput::failure("denied"));
    }

    #[test]
    fn test_failure_with_empty_stderr_falls_back_to_both_streams() {
        let outcome = ProcessOutcome::exited("kubectl", Some(2), "partial output\n", "");
        assert_eq!(
            normalize(&outcome),
            ToolOutput::failure("kubectl exited with code 2\npartial output")
        );

        let silent = ProcessOutcome::exited("kubectl", Some(3), "", "\n");
        assert_eq!(
            normalize(&silent),
            ToolOutput::failure("kubectl exited with code 3")
        );
    }

    #[test]
    fn test_signal_termination_is_an_error() {
        let outcome = ProcessOutcome::exited("kubectl", None, "", "");
        let output = normalize(&outcome);
        assert!(output.error);
        assert_eq!(output.output, "kubectl terminated by signal");
    }

    #[test]
    fn test_spawn_failure_is_captured() {
        let outcome = ProcessOutcome::spawn_failed("kubectl", "No such file or directory");
        assert_eq!(
            normalize(&outcome),
            ToolOutput::failure("Failed to execute kubectl: No such file or directory")
        );
        assert_eq!(outcome.exit_code(), None);
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let outcomes = [
            ProcessOutcome::exited("kubectl", Some(0), "ok\n", ""),
            ProcessOutcome::exited("kubectl", Some(1), "", "denied"),
            ProcessOutcome::spawn_failed("kubectl", "not found"),
        ];
        for outcome in &outcomes {
            assert_eq!(normalize(outcome), normalize(outcome));
        }
    }
}
