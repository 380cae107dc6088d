//! Config schema command implementation.
//!
//! `gqlint config-schema` prints the JSON Schema of `.gqlint.yml` for
//! editor integration.

use crate::config::config_json_schema;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config-schema command implementation.
pub struct ConfigSchemaCommand;

impl Command for ConfigSchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = serde_json::to_string_pretty(&config_json_schema())
            .map_err(anyhow::Error::from)?;
        ui.report(&format!("{}\n", schema));
        Ok(CommandResult::success())
    }
}
