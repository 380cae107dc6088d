//! Lint command implementation.
//!
//! The `gqlint lint` command parses the schema, runs the active rules and
//! prints the report in the requested format.

use std::path::{Path, PathBuf};

use crate::cli::args::LintArgs;
use crate::config::{load_config, validate, ConfigOverrides, LintConfig};
use crate::error::{GqlintError, Result};
use crate::lint::{render, LintWarning, OutputFormat, PluginLoader, RuleRegistry, RuleRunner};
use crate::schema::{expand_schema_paths, parse_sources, SourceFile};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, EXIT_FINDINGS};

/// The lint command implementation.
pub struct LintCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: LintArgs,
}

impl LintCommand {
    /// Create a new lint command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: LintArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &LintArgs {
        &self.args
    }

    /// Read the schema sources named by the config, or stdin.
    fn read_sources(&self, config: &LintConfig) -> Result<Vec<SourceFile>> {
        if self.args.stdin {
            return Ok(vec![SourceFile::from_reader(std::io::stdin().lock())?]);
        }

        if config.schema_paths.is_empty() {
            return Err(GqlintError::ConfigValidationError {
                message: "no schema paths given; pass them as arguments, use --stdin or set \
                          schema_paths in .gqlint.yml"
                    .to_string(),
            });
        }

        expand_schema_paths(&self.project_root, &config.schema_paths)?
            .iter()
            .map(|path| SourceFile::read(path, &self.project_root))
            .collect()
    }
}

impl Command for LintCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = resolve_config(
            &self.project_root,
            self.config_path.as_deref(),
            self.args.overrides(),
        )?;

        let sources = self.read_sources(&config)?;
        tracing::debug!("Linting {} schema file(s)", sources.len());
        let schema = parse_sources(&sources)?;

        let (registry, load_warnings) = load_registry(&config, &self.project_root)?;
        let (active, resolve_warnings) = registry.resolve(&config.rules, &config.exclude_rules);

        let report = RuleRunner::new()
            .run(&schema, &sources, &active, &config.ignore_marker)
            .with_warnings(load_warnings.into_iter().chain(resolve_warnings));

        for warning in &report.warnings {
            ui.warning(&warning.to_string());
        }

        let use_color = ui.use_color() && config.format == OutputFormat::Text;
        let rendered = render(
            config.format,
            &report.diagnostics,
            use_color,
            &active.descriptions(),
        )?;
        ui.report(&rendered);

        if report.has_findings() {
            if config.format == OutputFormat::Text {
                let count = report.diagnostics.len();
                ui.message(&format!(
                    "{} problem{} found",
                    count,
                    if count == 1 { "" } else { "s" }
                ));
            }
            Ok(CommandResult::failure(EXIT_FINDINGS))
        } else {
            if config.format == OutputFormat::Text {
                ui.success("No problems found");
            }
            Ok(CommandResult::success())
        }
    }
}

/// Load the config file, layer command-line values on top and validate.
pub(crate) fn resolve_config(
    project_root: &Path,
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<LintConfig> {
    let mut config = load_config(project_root, config_path)?;
    config.apply(overrides);
    validate(&config)?;
    Ok(config)
}

/// Built-in rules plus every plugin found in the configured directories.
pub(crate) fn load_registry(
    config: &LintConfig,
    project_root: &Path,
) -> Result<(RuleRegistry, Vec<LintWarning>)> {
    let mut registry = RuleRegistry::with_builtins()?;
    let loader = PluginLoader::with_timeout(config.plugin_timeout());
    let warnings = loader.load_dirs(&mut registry, &config.plugin_dirs(project_root));
    Ok((registry, warnings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn project(schema: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("schema.graphql"), schema).unwrap();
        temp
    }

    fn args(rules: &[&str]) -> LintArgs {
        LintArgs {
            schema_paths: vec!["schema.graphql".to_string()],
            rules: Some(rules.iter().map(|r| r.to_string()).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn clean_schema_succeeds() {
        let temp = project("\"Root\"\ntype Query {\n  \"Name\"\n  name: String\n}\n");
        let cmd = LintCommand::new(temp.path(), None, args(&["fields-have-descriptions"]));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.reported(), "");
        assert!(ui.has_success("No problems found"));
    }

    #[test]
    fn findings_exit_with_one() {
        let temp = project("type Query {\n  name: String\n}\n");
        let cmd = LintCommand::new(temp.path(), None, args(&["fields-have-descriptions"]));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert_eq!(
            ui.reported(),
            "schema.graphql:2:3: The field `Query.name` is missing a description. (fields-have-descriptions)\n"
        );
        assert!(ui.has_message("1 problem found"));
    }

    #[test]
    fn unknown_rule_is_a_warning_not_an_error() {
        let temp = project("\"Root\"\ntype Query {\n  \"Name\"\n  name: String\n}\n");
        let cmd = LintCommand::new(
            temp.path(),
            None,
            args(&["fields-have-descriptions", "no-such-rule"]),
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_warning("unknown rule 'no-such-rule'"));
    }

    #[test]
    fn config_file_supplies_schema_paths_and_format() {
        let temp = project("type Query {\n  name: String\n}\n");
        fs::write(
            temp.path().join(".gqlint.yml"),
            "schema_paths: [schema.graphql]\nrules: [fields-have-descriptions]\nformat: json\n",
        )
        .unwrap();
        let cmd = LintCommand::new(temp.path(), None, LintArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        let json: serde_json::Value = serde_json::from_str(ui.reported()).unwrap();
        assert_eq!(json["errors"][0]["rule"], "fields-have-descriptions");
    }

    #[test]
    fn missing_schema_paths_is_an_error() {
        let temp = TempDir::new().unwrap();
        let cmd = LintCommand::new(temp.path(), None, LintArgs::default());
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();

        assert!(matches!(err, GqlintError::ConfigValidationError { .. }));
    }

    #[test]
    fn syntax_error_is_fatal() {
        let temp = project("type Query {\n  name: \n");
        let cmd = LintCommand::new(temp.path(), None, args(&[]));
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();

        assert!(matches!(err, GqlintError::SchemaParseError { .. }));
    }

    #[test]
    fn ignore_marker_suppresses_line() {
        let temp = project("type Query {\n  name: String # lint-ignore\n}\n");
        let cmd = LintCommand::new(temp.path(), None, args(&["fields-have-descriptions"]));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
    }
}
