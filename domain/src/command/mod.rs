//! Command domain module
//!
//! The process-facing half of the pipeline:
//!
//! ```text
//! CommandArgs ──▶ CommandSpec ──▶ (runner) ──▶ ProcessOutcome ──▶ normalize() ──▶ ToolOutput
//! ```
//!
//! [`CommandArgs`] is what an operation builds; [`CommandSpec`] adds the
//! program and configuration-wide arguments; [`normalize`] is the single
//! place where exit codes and streams become a result.

pub mod outcome;
pub mod invocation;

pub use outcome::{ProcessOutcome, normalize};
pub use invocation::{CommandArgs, CommandSpec};
