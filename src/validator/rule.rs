//! Validator definitions.
//!
//! - [`Validator`] - The trait that all deployment checks implement
//! - [`ValidatorId`] - Unique identifier for a validator
//! - [`Level`] - How a failed check affects the deployment

use super::error::ValidatorError;
use super::result::ValidationResult;

/// Unique identifier for a validator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatorId(pub String);

impl ValidatorId {
    /// Create a new validator ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for ValidatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a failed check affects the deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Reported, but the deployment may proceed.
    Warning,
    /// Blocks the deployment.
    Critical,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Warning => write!(f, "warning"),
            Level::Critical => write!(f, "critical"),
        }
    }
}

/// A deployment precondition check.
///
/// A validator answers once per run. A negative answer is a
/// [`ValidationResult::Error`]; a check that could not be evaluated at all
/// returns a [`ValidatorError`].
pub trait Validator: Send + Sync {
    /// Unique identifier for this validator.
    fn id(&self) -> ValidatorId;

    /// Human-readable name of the validator.
    fn name(&self) -> &str;

    /// Description of what this validator checks.
    fn description(&self) -> &str;

    /// Level applied when the check fails.
    fn level(&self) -> Level {
        Level::Critical
    }

    /// Run the check.
    fn validate(&self) -> Result<ValidationResult, ValidatorError>;
}
