//! Validate command implementation.
//!
//! The `predeploy validate` command runs every registered validator and
//! reports the results.

use std::path::{Path, PathBuf};

use crate::cli::args::ValidateArgs;
use crate::error::{PredeployError, Result};
use crate::ui::UserInterface;
use crate::validator::{
    HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter, ValidationPipeline,
    ValidationReport, ValidatorError, ValidatorRegistry,
};
use crate::version::SemanticVersion;

use super::dispatcher::{Command, CommandResult};
use super::{load_checked_config, EXIT_CONFIG_ERROR, EXIT_VALIDATION_FAILED};

/// The validate command implementation.
pub struct ValidateCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: ValidateArgs,
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: ValidateArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ValidateArgs {
        &self.args
    }

    fn platform_version(&self) -> Result<Option<SemanticVersion>> {
        self.args
            .platform_version
            .as_deref()
            .map(|v| v.parse::<SemanticVersion>().map_err(PredeployError::from))
            .transpose()
    }

    fn format_report(&self, format: OutputFormat, report: &ValidationReport) -> String {
        let mut output = Vec::new();

        match format {
            OutputFormat::Json => JsonFormatter::new().format(report, &mut output).ok(),
            OutputFormat::Human => HumanFormatter::new().format(report, &mut output).ok(),
        };

        String::from_utf8(output).unwrap_or_default()
    }

    fn report_execution_failure(&self, err: &ValidatorError, ui: &mut dyn UserInterface) {
        let validator = err
            .validator()
            .map(ToString::to_string)
            .unwrap_or_else(|| "validator".to_string());
        ui.error(&format!(
            "{} could not run: {} (code {})",
            validator,
            err.message(),
            err.code()
        ));
    }

    fn show_human(&self, report: &ValidationReport, ui: &mut dyn UserInterface) {
        if ui.output_mode().shows_details() {
            for entry in report.entries().iter().filter(|e| e.result.is_success()) {
                ui.success(&format!("{} ({})", entry.name, entry.validator));
            }
        }

        if report.is_clean() {
            ui.success(&format!("All {} validator(s) passed", report.passed_count()));
            return;
        }

        let output = self.format_report(OutputFormat::Human, report);
        for line in output.lines() {
            if line.starts_with("error") {
                ui.error(line);
            } else if line.starts_with("warning") {
                ui.warning(line);
            } else {
                ui.message(line);
            }
        }
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_checked_config(&self.project_root, self.config_override.as_deref())
        {
            Ok(c) => c,
            Err(e) if e.is_config_error() => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_CONFIG_ERROR));
            }
            Err(e) => return Err(e),
        };

        let platform_version = match self.platform_version() {
            Ok(v) => v,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_CONFIG_ERROR));
            }
        };

        let format = self.args.format.unwrap_or(config.settings.default_format);
        let registry =
            ValidatorRegistry::with_builtins(&config, &self.project_root, platform_version);

        let report = match ValidationPipeline::new().run(&registry) {
            Ok(report) => report,
            Err(err) => {
                self.report_execution_failure(&err, ui);
                return Ok(CommandResult::failure(EXIT_VALIDATION_FAILED));
            }
        };

        match format {
            OutputFormat::Json => ui.output(&self.format_report(OutputFormat::Json, &report)),
            OutputFormat::Human => self.show_human(&report, ui),
        }

        if report.has_blocking_errors(self.args.strict) {
            Ok(CommandResult::failure(EXIT_VALIDATION_FAILED))
        } else {
            Ok(CommandResult::success())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    const LOCK_2_4_4: &str = r#"{"packages": [{"name": "platform/core", "version": "2.4.4"}]}"#;

    fn setup_project(lock: &str, relationships: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("composer.lock"), lock).unwrap();
        fs::write(temp.path().join("relationships.json"), relationships).unwrap();
        let dir = temp.path().join(".predeploy");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("config.yml"),
            "services:\n  relationships_env: \"\"\n  relationships_file: relationships.json\n",
        )
        .unwrap();
        temp
    }

    fn run(temp: &TempDir, args: ValidateArgs, ui: &mut MockUI) -> CommandResult {
        ValidateCommand::new(temp.path(), None, args)
            .execute(ui)
            .unwrap()
    }

    #[test]
    fn validate_command_creation() {
        let temp = TempDir::new().unwrap();
        let cmd = ValidateCommand::new(temp.path(), None, ValidateArgs::default());
        assert_eq!(cmd.project_root(), temp.path());
        assert!(!cmd.args().strict);
    }

    #[test]
    fn passes_when_successor_installed() {
        let temp = setup_project(LOCK_2_4_4, r#"{"opensearch": [{"host": "os.internal"}]}"#);
        let mut ui = MockUI::new();

        let result = run(&temp, ValidateArgs::default(), &mut ui);

        assert!(result.success);
        assert!(ui.has_success("All 1 validator(s) passed"));
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn blocks_when_no_search_backend() {
        let temp = setup_project(LOCK_2_4_4, "{}");
        let mut ui = MockUI::new();

        let result = run(&temp, ValidateArgs::default(), &mut ui);

        assert_eq!(result.exit_code, EXIT_VALIDATION_FAILED);
        assert!(ui.has_error("error[ES_SERVICE_NOT_INSTALLED]"));
        assert!(ui.has_message("= help:"));
        assert!(ui.has_message("Found 1 error(s) and 0 warning(s)"));
    }

    #[test]
    fn platform_version_override_skips_lock_file() {
        let temp = setup_project("not json", "{}");
        let mut ui = MockUI::new();

        let args = ValidateArgs {
            platform_version: Some("2.3.9".to_string()),
            ..Default::default()
        };
        let result = run(&temp, args, &mut ui);

        assert!(result.success);
    }

    #[test]
    fn invalid_platform_version_is_config_error() {
        let temp = setup_project(LOCK_2_4_4, "{}");
        let mut ui = MockUI::new();

        let args = ValidateArgs {
            platform_version: Some("latest".to_string()),
            ..Default::default()
        };
        let result = run(&temp, args, &mut ui);

        assert_eq!(result.exit_code, EXIT_CONFIG_ERROR);
        assert!(ui.has_error("latest"));
    }

    #[test]
    fn oracle_failure_is_reported_and_fails() {
        let temp = setup_project("{\"packages\": []}", "{}");
        let mut ui = MockUI::new();

        let result = run(&temp, ValidateArgs::default(), &mut ui);

        assert_eq!(result.exit_code, EXIT_VALIDATION_FAILED);
        assert!(ui.has_error("search-backend-presence could not run"));
        assert!(ui.has_error("platform/core"));
        assert!(ui.has_error("(code 201)"));
    }

    #[test]
    fn json_format_writes_report() {
        let temp = setup_project(LOCK_2_4_4, "{}");
        let mut ui = MockUI::new();

        let args = ValidateArgs {
            format: Some(OutputFormat::Json),
            ..Default::default()
        };
        let result = run(&temp, args, &mut ui);

        assert_eq!(result.exit_code, EXIT_VALIDATION_FAILED);
        let json: serde_json::Value = serde_json::from_str(&ui.output_text()).unwrap();
        assert_eq!(json["summary"]["errors"], 1);
        assert_eq!(json["results"][0]["error"]["id"], "ES_SERVICE_NOT_INSTALLED");
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn config_default_format_applies() {
        let temp = setup_project(LOCK_2_4_4, r#"{"opensearch": [{}]}"#);
        fs::write(
            temp.path().join(".predeploy").join("config.local.yml"),
            "settings:\n  default_format: json\n",
        )
        .unwrap();
        let mut ui = MockUI::new();

        let result = run(&temp, ValidateArgs::default(), &mut ui);

        assert!(result.success);
        let json: serde_json::Value = serde_json::from_str(&ui.output_text()).unwrap();
        assert_eq!(json["summary"]["passed"], 1);
    }

    #[test]
    fn verbose_lists_passing_validators() {
        let temp = setup_project(LOCK_2_4_4, r#"{"opensearch": [{}]}"#);
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        run(&temp, ValidateArgs::default(), &mut ui);

        assert!(ui.has_success("Search Backend Presence (search-backend-presence)"));
    }

    #[test]
    fn invalid_config_exits_with_config_error() {
        let temp = setup_project(LOCK_2_4_4, "{}");
        fs::write(
            temp.path().join(".predeploy").join("config.yml"),
            "services:\n  legacy: search\n  successor: search\n",
        )
        .unwrap();
        let mut ui = MockUI::new();

        let result = run(&temp, ValidateArgs::default(), &mut ui);

        assert_eq!(result.exit_code, EXIT_CONFIG_ERROR);
        assert!(ui.has_error("Invalid configuration"));
    }

    #[test]
    fn unparseable_config_exits_with_config_error() {
        let temp = setup_project(LOCK_2_4_4, "{}");
        fs::write(
            temp.path().join(".predeploy").join("config.yml"),
            "services: [broken",
        )
        .unwrap();
        let mut ui = MockUI::new();

        let result = run(&temp, ValidateArgs::default(), &mut ui);

        assert_eq!(result.exit_code, EXIT_CONFIG_ERROR);
    }
}
