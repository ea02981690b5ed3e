//! Running validators and collecting their results.
//!
//! The pipeline runs every registered validator once, in order. Failed
//! checks are collected into a [`ValidationReport`] so they can be reported
//! together. A validator that cannot run at all stops the pipeline: the
//! returned [`ValidatorError`] is a tool failure, not a deployment verdict.

use super::error::ValidatorError;
use super::registry::ValidatorRegistry;
use super::result::{ErrorCode, ValidationResult};
use super::rule::{Level, ValidatorId};

/// One validator's contribution to a report.
#[derive(Debug, Clone)]
pub struct ReportEntry {
    /// Validator that produced the result.
    pub validator: ValidatorId,
    /// Validator display name.
    pub name: String,
    /// Level of the validator.
    pub level: Level,
    /// The outcome.
    pub result: ValidationResult,
}

impl ReportEntry {
    /// Error code, if the check failed.
    pub fn error_code(&self) -> Option<ErrorCode> {
        self.result.error_code()
    }
}

/// Results of a pipeline run.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    entries: Vec<ReportEntry>,
}

impl ValidationReport {
    /// Create a report from entries.
    pub fn new(entries: Vec<ReportEntry>) -> Self {
        Self { entries }
    }

    /// All entries, in run order.
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Entries whose check failed.
    pub fn failures(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| !e.result.is_success())
    }

    /// Number of failed critical checks.
    pub fn error_count(&self) -> usize {
        self.failures()
            .filter(|e| e.level == Level::Critical)
            .count()
    }

    /// Number of failed warning-level checks.
    pub fn warning_count(&self) -> usize {
        self.failures()
            .filter(|e| e.level == Level::Warning)
            .count()
    }

    /// Number of passed checks.
    pub fn passed_count(&self) -> usize {
        self.entries.len() - self.failures().count()
    }

    /// Whether every check passed.
    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Whether the deployment must stop.
    ///
    /// Critical failures always block; with `strict`, warnings block too.
    pub fn has_blocking_errors(&self, strict: bool) -> bool {
        self.error_count() > 0 || (strict && self.warning_count() > 0)
    }
}

/// Runs all validators of a registry.
#[derive(Debug, Default)]
pub struct ValidationPipeline;

impl ValidationPipeline {
    /// Create a new pipeline.
    pub fn new() -> Self {
        Self
    }

    /// Run every validator in `registry`.
    ///
    /// Stops at the first validator that cannot run.
    pub fn run(&self, registry: &ValidatorRegistry) -> Result<ValidationReport, ValidatorError> {
        let mut entries = Vec::with_capacity(registry.len());

        for validator in registry.iter() {
            let id = validator.id();
            tracing::debug!("Running validator {}", id);

            let result = validator.validate().map_err(|e| {
                tracing::debug!("Validator {} could not run: {}", id, e);
                if e.validator().is_some() {
                    e
                } else {
                    e.with_validator(id.clone())
                }
            })?;

            match result {
                ValidationResult::Success => tracing::debug!("Validator {} passed", id),
                ValidationResult::Error(code) => {
                    tracing::debug!("Validator {} failed: {}", id, code)
                }
            }

            entries.push(ReportEntry {
                validator: id,
                name: validator.name().to_string(),
                level: validator.level(),
                result,
            });
        }

        Ok(ValidationReport::new(entries))
    }
}
