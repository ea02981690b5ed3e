//! Configuration validation.
//!
//! Catches settings that would make every validation run meaningless, before
//! any oracle is queried.

use crate::config::schema::PredeployConfig;
use crate::error::{PredeployError, Result};

/// Validate a loaded configuration.
///
/// # Errors
///
/// Returns `ConfigValidationError` describing the first problem found.
pub fn validate_config(config: &PredeployConfig) -> Result<()> {
    let invalid = |message: &str| {
        Err(PredeployError::ConfigValidationError {
            message: message.to_string(),
        })
    };

    if config.platform.package.trim().is_empty() {
        return invalid("platform.package cannot be empty");
    }
    if config.platform.lock_file.as_os_str().is_empty() {
        return invalid("platform.lock_file cannot be empty");
    }
    if config.services.legacy.trim().is_empty() {
        return invalid("services.legacy cannot be empty");
    }
    if config.services.successor.trim().is_empty() {
        return invalid("services.successor cannot be empty");
    }
    if config.services.legacy == config.services.successor {
        return invalid("services.legacy and services.successor must name different relationships");
    }

    Ok(())
}
