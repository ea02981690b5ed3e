//! Command-line interface for predeploy.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, ListArgs, ValidateArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
