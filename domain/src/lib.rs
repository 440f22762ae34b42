//! Domain layer for kubecall
//!
//! Pure command construction for kubectl: typed operation parameters,
//! argument builders, the operation catalog, and the normalization of raw
//! process outcomes into a uniform [`ToolOutput`].
//!
//! Nothing in this crate spawns a process or performs I/O.

pub mod command;
pub mod core;
pub mod kubectl;
pub mod tool;

// Re-export commonly used types
pub use command::{CommandArgs, CommandSpec, ProcessOutcome, normalize};
pub use core::error::ValidationError;
pub use kubectl::{KubectlOperation, OperationCatalog, OperationPlan, PatchType, SortBy};
pub use tool::{ToolCall, ToolDefinition, ToolHints, ToolOutput, ToolParameter};
