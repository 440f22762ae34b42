//! Process Runner port
//!
//! Defines how the application layer starts an external program and
//! observes it to completion.

use async_trait::async_trait;
use kubecall_domain::{CommandSpec, ProcessOutcome};

/// Port for running one external process
///
/// Implementations start `spec.program` directly (never through a shell),
/// write `spec.input` to stdin when present, and capture both output
/// streams in full. Every failure, including a spawn failure, is reported
/// as a [`ProcessOutcome`]; this method does not error.
#[async_trait]
pub trait ProcessRunnerPort: Send + Sync {
    async fn run(&self, spec: &CommandSpec) -> ProcessOutcome;
}
