//! Application-level configuration.
//!
//! - [`KubectlSettings`] - binary and cluster selection shared by every command

pub mod kubectl_settings;

pub use kubectl_settings::KubectlSettings;
