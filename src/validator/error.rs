//! Validator execution failures.

use thiserror::Error;

use super::rule::ValidatorId;
use crate::oracle::LookupError;

/// A validator could not evaluate its check.
///
/// Carries the message and code of the underlying [`LookupError`], which
/// stays reachable through [`std::error::Error::source`].
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ValidatorError {
    message: String,
    code: i32,
    validator: Option<ValidatorId>,
    #[source]
    source: LookupError,
}

impl ValidatorError {
    /// Message of the underlying failure.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Code of the underlying failure.
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Validator that failed, once known.
    pub fn validator(&self) -> Option<&ValidatorId> {
        self.validator.as_ref()
    }

    /// The underlying lookup failure.
    pub fn lookup_error(&self) -> &LookupError {
        &self.source
    }

    /// Attribute the failure to a validator.
    pub fn with_validator(mut self, id: ValidatorId) -> Self {
        self.validator = Some(id);
        self
    }
}

impl From<LookupError> for ValidatorError {
    fn from(source: LookupError) -> Self {
        Self {
            message: source.to_string(),
            code: source.code(),
            validator: None,
            source,
        }
    }
}
