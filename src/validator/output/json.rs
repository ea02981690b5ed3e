//! JSON output formatter.
//!
//! Formats validation reports as machine-readable JSON for tooling integration.

use super::ReportFormatter;
use crate::validator::ValidationReport;
use serde::Serialize;
use std::io::Write;

/// Formats reports as JSON.
#[derive(Debug, Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    results: Vec<JsonResult>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonResult {
    validator: String,
    name: String,
    level: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonError>,
}

#[derive(Serialize)]
struct JsonError {
    id: &'static str,
    code: u32,
    message: &'static str,
    suggestion: &'static str,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    passed: usize,
    errors: usize,
    warnings: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &ValidationReport, writer: &mut W) -> std::io::Result<()> {
        let results = report
            .entries()
            .iter()
            .map(|e| JsonResult {
                validator: e.validator.0.clone(),
                name: e.name.clone(),
                level: e.level.to_string(),
                status: if e.result.is_success() {
                    "success"
                } else {
                    "error"
                },
                error: e.error_code().map(|code| JsonError {
                    id: code.id(),
                    code: code.code(),
                    message: code.message(),
                    suggestion: code.suggestion(),
                }),
            })
            .collect();

        let output = JsonOutput {
            results,
            summary: JsonSummary {
                total: report.entries().len(),
                passed: report.passed_count(),
                errors: report.error_count(),
                warnings: report.warning_count(),
            },
        };

        serde_json::to_writer_pretty(writer, &output).map_err(std::io::Error::other)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{ErrorCode, Level, ReportEntry, ValidationResult, ValidatorId};

    fn render(report: &ValidationReport) -> serde_json::Value {
        let mut output = Vec::new();
        JsonFormatter::new().format(report, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn includes_error_details_for_failures() {
        let report = ValidationReport::new(vec![ReportEntry {
            validator: ValidatorId::new("search-backend-presence"),
            name: "Search Backend Presence".to_string(),
            level: Level::Critical,
            result: ValidationResult::Error(ErrorCode::EsServiceNotInstalled),
        }]);

        let parsed = render(&report);

        let result = &parsed["results"][0];
        assert_eq!(result["validator"], "search-backend-presence");
        assert_eq!(result["level"], "critical");
        assert_eq!(result["status"], "error");
        assert_eq!(result["error"]["id"], "ES_SERVICE_NOT_INSTALLED");
        assert_eq!(result["error"]["code"], 2012);
        assert_eq!(parsed["summary"]["errors"], 1);
    }

    #[test]
    fn omits_error_for_success() {
        let report = ValidationReport::new(vec![ReportEntry {
            validator: ValidatorId::new("search-backend-presence"),
            name: "Search Backend Presence".to_string(),
            level: Level::Critical,
            result: ValidationResult::Success,
        }]);

        let parsed = render(&report);

        assert_eq!(parsed["results"][0]["status"], "success");
        assert!(parsed["results"][0]["error"].is_null());
        assert_eq!(parsed["summary"]["passed"], 1);
        assert_eq!(parsed["summary"]["total"], 1);
    }

    #[test]
    fn empty_report() {
        let parsed = render(&ValidationReport::default());
        assert!(parsed["results"].as_array().unwrap().is_empty());
        assert_eq!(parsed["summary"]["total"], 0);
    }
}
