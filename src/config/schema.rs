//! Configuration schema definitions for gqlint.
//!
//! This module contains the struct that maps to the `.gqlint.yml` file
//! format, plus the command-line overrides layered on top of it.

use std::path::{Path, PathBuf};
use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lint::{OutputFormat, DEFAULT_IGNORE_MARKER};

/// Root configuration structure for `.gqlint.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    /// Schema files or glob patterns, relative to the project root
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub schema_paths: Vec<String>,

    /// Built-in rules to run (empty runs all of them)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<String>,

    /// Rules to skip, built-in or plugin
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude_rules: Vec<String>,

    /// Directories containing plugin executables
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_rule_paths: Vec<PathBuf>,

    /// Text that suppresses diagnostics on the line it appears on
    #[serde(default = "default_ignore_marker")]
    pub ignore_marker: String,

    /// Output format
    pub format: OutputFormat,

    /// Seconds a plugin may run before it is killed
    #[serde(default = "default_plugin_timeout_secs")]
    pub plugin_timeout_secs: u64,
}

fn default_ignore_marker() -> String {
    DEFAULT_IGNORE_MARKER.to_string()
}

fn default_plugin_timeout_secs() -> u64 {
    30
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            schema_paths: Vec::new(),
            rules: Vec::new(),
            exclude_rules: Vec::new(),
            custom_rule_paths: Vec::new(),
            ignore_marker: default_ignore_marker(),
            format: OutputFormat::default(),
            plugin_timeout_secs: default_plugin_timeout_secs(),
        }
    }
}

impl LintConfig {
    /// Plugin invocation timeout.
    pub fn plugin_timeout(&self) -> Duration {
        Duration::from_secs(self.plugin_timeout_secs)
    }

    /// Plugin directories, with relative entries resolved against `root`.
    pub fn plugin_dirs(&self, root: &Path) -> Vec<PathBuf> {
        self.custom_rule_paths
            .iter()
            .map(|p| if p.is_absolute() { p.clone() } else { root.join(p) })
            .collect()
    }

    /// Apply command-line overrides. Any value given on the command line
    /// replaces the file value wholesale.
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if !overrides.schema_paths.is_empty() {
            self.schema_paths = overrides.schema_paths;
        }
        if let Some(rules) = overrides.rules {
            self.rules = rules;
        }
        if let Some(exclude) = overrides.exclude_rules {
            self.exclude_rules = exclude;
        }
        if let Some(paths) = overrides.custom_rule_paths {
            self.custom_rule_paths = paths;
        }
        if let Some(marker) = overrides.ignore_marker {
            self.ignore_marker = marker;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
    }
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub schema_paths: Vec<String>,
    pub rules: Option<Vec<String>>,
    pub exclude_rules: Option<Vec<String>>,
    pub custom_rule_paths: Option<Vec<PathBuf>>,
    pub ignore_marker: Option<String>,
    pub format: Option<OutputFormat>,
}

/// JSON Schema describing `.gqlint.yml`.
pub fn config_json_schema() -> serde_json::Value {
    serde_json::to_value(schemars::schema_for!(LintConfig)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = LintConfig::default();
        assert_eq!(config.ignore_marker, "lint-ignore");
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.plugin_timeout(), Duration::from_secs(30));
        assert!(config.rules.is_empty());
    }

    #[test]
    fn empty_yaml_is_default() {
        let config: LintConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, LintConfig::default());
    }

    #[test]
    fn parses_full_config() {
        let yaml = r#"
schema_paths:
  - "schema/**/*.graphql"
rules:
  - types-have-descriptions
exclude_rules:
  - defined-types-are-used
custom_rule_paths:
  - rules
ignore_marker: "noqa"
format: json
plugin_timeout_secs: 5
"#;
        let config: LintConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.schema_paths, vec!["schema/**/*.graphql"]);
        assert_eq!(config.rules, vec!["types-have-descriptions"]);
        assert_eq!(config.exclude_rules, vec!["defined-types-are-used"]);
        assert_eq!(config.ignore_marker, "noqa");
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.plugin_timeout_secs, 5);
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: std::result::Result<LintConfig, _> = serde_yaml::from_str("rulez: []");
        assert!(result.is_err());
    }

    #[test]
    fn plugin_dirs_resolve_against_root() {
        let config = LintConfig {
            custom_rule_paths: vec![PathBuf::from("rules"), PathBuf::from("/opt/rules")],
            ..Default::default()
        };

        let dirs = config.plugin_dirs(Path::new("/project"));

        assert_eq!(
            dirs,
            vec![PathBuf::from("/project/rules"), PathBuf::from("/opt/rules")]
        );
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut config = LintConfig {
            schema_paths: vec!["a.graphql".into()],
            rules: vec!["types-have-descriptions".into()],
            ..Default::default()
        };

        config.apply(ConfigOverrides {
            schema_paths: vec!["b.graphql".into()],
            exclude_rules: Some(vec!["enum-values-all-caps".into()]),
            format: Some(OutputFormat::Sarif),
            ..Default::default()
        });

        assert_eq!(config.schema_paths, vec!["b.graphql"]);
        assert_eq!(config.rules, vec!["types-have-descriptions"]);
        assert_eq!(config.exclude_rules, vec!["enum-values-all-caps"]);
        assert_eq!(config.format, OutputFormat::Sarif);
    }

    #[test]
    fn json_schema_lists_properties() {
        let schema = config_json_schema();
        let properties = &schema["properties"];
        assert!(properties["rules"].is_object());
        assert!(properties["plugin_timeout_secs"].is_object());
    }
}
