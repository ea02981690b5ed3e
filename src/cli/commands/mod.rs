//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations.

pub mod completions;
pub mod dispatcher;
pub mod list;
pub mod validate;

use std::path::Path;

use crate::config::{load_config, validate_config, PredeployConfig};
use crate::error::Result;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

/// Exit code for configuration and usage errors.
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Exit code for blocking validation failures and validators that could not run.
pub const EXIT_VALIDATION_FAILED: i32 = 1;

/// Load and validate the configuration shared by all project commands.
fn load_checked_config(
    project_root: &Path,
    config_override: Option<&Path>,
) -> Result<PredeployConfig> {
    let config = load_config(project_root, config_override)?;
    validate_config(&config)?;
    Ok(config)
}
