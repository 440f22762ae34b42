//! Configuration file loading for kubecall
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `KUBECALL_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./kubecall.toml` or `./.kubecall.toml`
//! 4. Global: `<config dir>/kubecall/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileKubectlConfig, FileOutputConfig, OutputFormat,
};
pub use loader::{ConfigError, ConfigLoader};
