//! Application layer for kubecall
//!
//! This crate contains the operation use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::KubectlSettings;
pub use ports::process_runner::ProcessRunnerPort;
pub use use_cases::execute_operation::{ExecuteOperationUseCase, OperationError};
