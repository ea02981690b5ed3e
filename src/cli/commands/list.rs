//! List command implementation.
//!
//! The `predeploy list` command lists the registered validators.

use std::path::{Path, PathBuf};

use serde_json::json;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::ui::theme::PredeployTheme;
use crate::ui::UserInterface;
use crate::validator::ValidatorRegistry;

use super::dispatcher::{Command, CommandResult};
use super::{load_checked_config, EXIT_CONFIG_ERROR};

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: ListArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    fn show_json(&self, registry: &ValidatorRegistry, ui: &mut dyn UserInterface) -> Result<()> {
        let validators: Vec<_> = registry
            .iter()
            .map(|v| {
                json!({
                    "id": v.id().0,
                    "name": v.name(),
                    "description": v.description(),
                    "level": v.level().to_string(),
                })
            })
            .collect();

        let text = serde_json::to_string_pretty(&validators).map_err(anyhow::Error::from)?;
        ui.output(&text);
        Ok(())
    }

    fn show_human(&self, registry: &ValidatorRegistry, ui: &mut dyn UserInterface) {
        let theme = PredeployTheme::detect();

        ui.message(&format!("  {}", theme.key.apply_to("Validators:")));
        for validator in registry.iter() {
            ui.message(&format!(
                "    {} {}",
                theme.highlight.apply_to(validator.id()),
                theme.dim.apply_to(format!("({})", validator.level()))
            ));
            ui.message(&format!("      {}", theme.dim.apply_to(validator.description())));
        }
    }
}

impl Command for ListCommand {
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

        // Listing never queries the oracles.
        let registry = ValidatorRegistry::with_builtins(&config, &self.project_root, None);

        if self.args.json {
            self.show_json(&registry, ui)?;
        } else {
            self.show_human(&registry, ui);
        }

        Ok(CommandResult::success())
    }
}
