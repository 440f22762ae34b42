//! tokio-backed process runner
//!
//! Starts the program directly with an argument vector, feeds stdin when
//! the command carries input, and drains stdout and stderr concurrently so a
//! chatty child can never block on a full pipe.

use async_trait::async_trait;
use kubecall_application::ProcessRunnerPort;
use kubecall_domain::{CommandSpec, ProcessOutcome};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

/// [`ProcessRunnerPort`] adapter over `tokio::process`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioProcessRunner;

impl TokioProcessRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(spec: &CommandSpec) -> Command {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args)
            .stdin(if spec.input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        // Linux: the child gets SIGTERM if this process dies first.
        #[cfg(target_os = "linux")]
        unsafe {
            cmd.pre_exec(|| {
                libc::prctl(libc::PR_SET_PDEATHSIG, libc::SIGTERM);
                Ok(())
            });
        }

        cmd
    }
}

#[async_trait]
impl ProcessRunnerPort for TokioProcessRunner {
    async fn run(&self, spec: &CommandSpec) -> ProcessOutcome {
        let mut child = match Self::command(spec).spawn() {
            Ok(child) => child,
            Err(e) => {
                warn!("Failed to spawn {}: {}", spec.program, e);
                return ProcessOutcome::spawn_failed(&spec.program, e.to_string());
            }
        };

        let stdin = child.stdin.take();
        let feed = async {
            if let (Some(mut stdin), Some(input)) = (stdin, spec.input.as_deref()) {
                match stdin.write_all(input.as_bytes()).await {
                    Ok(()) => {}
                    // The child exited without reading all of its input
                    Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                        debug!("{} closed stdin early", spec.program);
                    }
                    Err(e) => warn!("Failed to write stdin of {}: {}", spec.program, e),
                }
                // Dropping the handle closes stdin
            }
        };

        let ((), output) = tokio::join!(feed, child.wait_with_output());

        match output {
            Ok(output) => ProcessOutcome::exited(
                &spec.program,
                output.status.code(),
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr),
            ),
            Err(e) => {
                warn!("Failed to collect output of {}: {}", spec.program, e);
                ProcessOutcome::spawn_failed(&spec.program, e.to_string())
            }
        }
    }
}

/// Whether `binary` resolves to an executable on `PATH` (or as given)
pub fn is_command_available(binary: &str) -> bool {
    which::which(binary).is_ok()
}
