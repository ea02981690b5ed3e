//! Validation outcomes.
//!
//! A validator produces exactly one [`ValidationResult`] per run. Failed
//! checks carry an [`ErrorCode`] from a fixed catalog, so operators and
//! tooling can rely on stable identifiers.

/// Catalog of coded deployment errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// No suitable search service is attached to the application.
    EsServiceNotInstalled,
}

impl ErrorCode {
    /// Stable identifier.
    pub fn id(&self) -> &'static str {
        match self {
            ErrorCode::EsServiceNotInstalled => "ES_SERVICE_NOT_INSTALLED",
        }
    }

    /// Stable numeric code.
    pub fn code(&self) -> u32 {
        match self {
            ErrorCode::EsServiceNotInstalled => 2012,
        }
    }

    /// Operator-facing message.
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::EsServiceNotInstalled => "Elasticsearch service is not installed",
        }
    }

    /// How to resolve the error.
    pub fn suggestion(&self) -> &'static str {
        match self {
            ErrorCode::EsServiceNotInstalled => {
                "Platform 2.4.0 and later requires a search service. Add an Elasticsearch \
                 service (or OpenSearch, for 2.4.4 and later) and attach it to the application \
                 through a relationship"
            }
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Outcome of one validator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    /// The precondition holds.
    Success,
    /// The precondition does not hold.
    Error(ErrorCode),
}

impl ValidationResult {
    /// Whether the check passed.
    pub fn is_success(&self) -> bool {
        matches!(self, ValidationResult::Success)
    }

    /// The error code of a failed check.
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            ValidationResult::Success => None,
            ValidationResult::Error(code) => Some(*code),
        }
    }
}
