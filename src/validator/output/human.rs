//! Human-readable output formatter.
//!
//! Formats failed checks for terminal display. Passed checks are only
//! counted in the summary.

use super::ReportFormatter;
use crate::validator::{Level, ValidationReport};
use std::io::Write;

/// Formats reports for human consumption.
#[derive(Debug, Default)]
pub struct HumanFormatter;

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new() -> Self {
        Self
    }

    fn level_prefix(&self, level: Level) -> &'static str {
        match level {
            Level::Warning => "warning",
            Level::Critical => "error",
        }
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &ValidationReport, writer: &mut W) -> std::io::Result<()> {
        for entry in report.failures() {
            let Some(code) = entry.error_code() else {
                continue;
            };

            // Header line: error[ES_SERVICE_NOT_INSTALLED]: message
            writeln!(
                writer,
                "{}[{}]: {}",
                self.level_prefix(entry.level),
                code.id(),
                code.message()
            )?;
            writeln!(writer, "  --> {} (code {})", entry.validator, code.code())?;
            writeln!(writer, "   = help: {}", code.suggestion())?;
            writeln!(writer)?;
        }

        let error_count = report.error_count();
        let warning_count = report.warning_count();

        if error_count > 0 || warning_count > 0 {
            writeln!(
                writer,
                "Found {} error(s) and {} warning(s)",
                error_count, warning_count
            )?;
        }

        Ok(())
    }
}
