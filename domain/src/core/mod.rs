//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ValidationError`] - pre-execution parameter rejection

pub mod error;
