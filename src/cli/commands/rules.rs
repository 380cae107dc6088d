//! Rules command implementation.
//!
//! The `gqlint rules` command lists the rules a lint run would execute,
//! including rules contributed by plugins.

use std::path::{Path, PathBuf};

use crate::cli::args::RulesArgs;
use crate::error::Result;
use crate::lint::RuleOrigin;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::lint::{load_registry, resolve_config};

/// The rules command implementation.
pub struct RulesCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: RulesArgs,
}

impl RulesCommand {
    /// Create a new rules command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: RulesArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for RulesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = resolve_config(
            &self.project_root,
            self.config_path.as_deref(),
            self.args.overrides(),
        )?;
        let (registry, load_warnings) = load_registry(&config, &self.project_root)?;
        let (active, resolve_warnings) = registry.resolve(&config.rules, &config.exclude_rules);

        for warning in load_warnings.iter().chain(&resolve_warnings) {
            ui.warning(&warning.to_string());
        }

        let width = active.names().into_iter().map(str::len).max().unwrap_or(0);
        let mut listing = String::new();
        for rule in active.iter() {
            let origin = match registry.origin(rule.name()) {
                Some(RuleOrigin::Plugin(path)) => format!(" [plugin: {}]", path.display()),
                _ => String::new(),
            };
            listing.push_str(&format!(
                "{:width$}  {}{}\n",
                rule.name(),
                rule.description(),
                origin,
                width = width
            ));
        }
        ui.report(&listing);

        Ok(CommandResult::success())
    }
}
