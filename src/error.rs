//! Error types for predeploy operations.
//!
//! This module defines [`PredeployError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A validator legitimately failing is not an error; it is a
//!   [`ValidationResult::Error`](crate::validator::ValidationResult) in the report
//! - An oracle that cannot answer surfaces as `PredeployError::Validator`
//! - Use `anyhow::Error` (via `PredeployError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::validator::ValidatorError;
use crate::version::VersionParseError;

/// Core error type for predeploy operations.
#[derive(Debug, Error)]
pub enum PredeployError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A version given on the command line could not be parsed.
    #[error(transparent)]
    InvalidVersion(#[from] VersionParseError),

    /// A validator could not determine its answer.
    #[error("Validator failed: {0}")]
    Validator(#[from] ValidatorError),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PredeployError {
    /// Whether this error stems from configuration or user input rather than
    /// from running validators.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigParseError { .. }
                | Self::ConfigValidationError { .. }
                | Self::InvalidVersion(_)
        )
    }
}

/// Result type alias for predeploy operations.
pub type Result<T> = std::result::Result<T, PredeployError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::LookupError;
    use std::error::Error as _;

    #[test]
    fn config_not_found_displays_path() {
        let err = PredeployError::ConfigNotFound {
            path: PathBuf::from("/foo/config.yml"),
        };
        assert!(err.to_string().contains("/foo/config.yml"));
        assert!(err.is_config_error());
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = PredeployError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn invalid_version_converts_from_parse_error() {
        let parse_err = "two.four".parse::<crate::version::SemanticVersion>().unwrap_err();
        let err: PredeployError = parse_err.into();
        assert!(err.to_string().contains("two.four"));
        assert!(err.is_config_error());
    }

    #[test]
    fn validator_error_keeps_source_chain() {
        let lookup = LookupError::UndefinedPackage {
            package: "platform/core".into(),
            lock_file: PathBuf::from("composer.lock"),
        };
        let err: PredeployError = ValidatorError::from(lookup).into();

        assert!(!err.is_config_error());
        assert!(err.to_string().contains("platform/core"));
        assert!(err.source().is_some());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PredeployError = io_err.into();
        assert!(matches!(err, PredeployError::Io(_)));
        assert!(!err.is_config_error());
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(PredeployError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
