//! Execute Operation use case
//!
//! Validates an operation's parameters, runs the planned kubectl command
//! through the [`ProcessRunnerPort`], and normalizes what came back.
//!
//! ```text
//! ToolCall ─▶ catalog lookup ─▶ plan() ─┬─▶ Command ─▶ runner ─▶ normalize ─▶ ToolOutput
//!                                       └─▶ Wait ─▶ sleep ─────────────────▶ ToolOutput
//! ```

use crate::config::KubectlSettings;
use crate::ports::process_runner::ProcessRunnerPort;
use kubecall_domain::{
    CommandArgs, CommandSpec, KubectlOperation, OperationCatalog, OperationPlan, ProcessOutcome,
    ToolCall, ToolOutput, ValidationError, normalize,
};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised before any process is started
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Use case for executing kubectl operations.
///
/// Each invocation is independent; concurrent calls share nothing but the
/// runner and the immutable settings.
pub struct ExecuteOperationUseCase<R: ProcessRunnerPort> {
    runner: Arc<R>,
    catalog: OperationCatalog,
    settings: KubectlSettings,
    global_args: Vec<String>,
}

impl<R: ProcessRunnerPort> ExecuteOperationUseCase<R> {
    pub fn new(runner: Arc<R>, settings: KubectlSettings) -> Self {
        let global_args = settings.global_args();
        Self {
            runner,
            catalog: OperationCatalog::standard(),
            settings,
            global_args,
        }
    }

    pub fn catalog(&self) -> &OperationCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> &KubectlSettings {
        &self.settings
    }

    /// Execute a typed operation.
    ///
    /// A `ValidationError` means nothing was spawned. Any failure after
    /// that point is reported inside the returned [`ToolOutput`].
    pub async fn execute<O: KubectlOperation>(&self, op: &O) -> Result<ToolOutput, ValidationError> {
        let plan = op.plan()?;
        Ok(self.run_plan(O::NAME, plan).await)
    }

    /// Execute an operation by name with JSON arguments
    pub async fn invoke(&self, call: &ToolCall) -> Result<ToolOutput, OperationError> {
        let entry = self
            .catalog
            .get(&call.tool_name)
            .ok_or_else(|| OperationError::UnknownOperation(call.tool_name.clone()))?;
        let plan = entry.plan(call.arguments_value())?;
        Ok(self.run_plan(&call.tool_name, plan).await)
    }

    /// Resolve the full invocation without running it
    pub fn command_spec(&self, args: CommandArgs) -> CommandSpec {
        CommandSpec::from_parts(&self.settings.binary, &self.global_args, args)
    }

    async fn run_plan(&self, operation: &str, plan: OperationPlan) -> ToolOutput {
        match plan {
            OperationPlan::Wait(duration) => wait(duration).await,
            OperationPlan::Command(args) => {
                let spec = self.command_spec(args);
                debug!(
                    "{}: {} ({} tokens, stdin: {} bytes)",
                    operation,
                    spec.display_line(),
                    spec.args.len(),
                    spec.input.as_ref().map_or(0, |s| s.len())
                );

                let outcome = self.runner.run(&spec).await;
                match &outcome {
                    ProcessOutcome::Exited { code, .. } => {
                        info!("{} finished with exit code {:?}", operation, code);
                    }
                    ProcessOutcome::SpawnFailed { program, message } => {
                        warn!("{} could not start {}: {}", operation, program, message);
                    }
                }
                normalize(&outcome)
            }
        }
    }
}

async fn wait(duration: Duration) -> ToolOutput {
    let seconds = duration.as_secs();
    debug!("Waiting for {} seconds", seconds);
    tokio::time::sleep(duration).await;
    ToolOutput::success(format!("Waited for {} seconds", seconds))
}
