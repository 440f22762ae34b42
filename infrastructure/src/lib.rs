//! Infrastructure layer for kubecall
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the tokio process runner and configuration
//! file loading.

pub mod config;
pub mod process;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, ConfigValidationError, FileConfig, FileKubectlConfig,
    FileOutputConfig, OutputFormat,
};
pub use process::{TokioProcessRunner, is_command_available};
