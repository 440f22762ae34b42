//! External process execution

mod runner;

pub use runner::{TokioProcessRunner, is_command_available};
