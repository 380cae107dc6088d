//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ConfigOverrides;
use crate::lint::OutputFormat;

/// gqlint - GraphQL schema linter.
#[derive(Debug, Parser)]
#[command(name = "gqlint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .gqlint.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Only print the report and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Lint schema files (default if no command specified)
    Lint(LintArgs),

    /// List the rules that would run
    Rules(RulesArgs),

    /// Print the JSON Schema of the config file
    ConfigSchema,
}

/// Arguments for the `lint` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LintArgs {
    /// Schema files or glob patterns (overrides schema_paths)
    pub schema_paths: Vec<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Only run these built-in rules (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub rules: Option<Vec<String>>,

    /// Skip these rules (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub exclude_rules: Option<Vec<String>>,

    /// Directories containing plugin rules (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub custom_rule_paths: Option<Vec<PathBuf>>,

    /// Text that suppresses diagnostics on its line
    #[arg(long)]
    pub ignore_marker: Option<String>,

    /// Read the schema from stdin
    #[arg(long, conflicts_with = "schema_paths")]
    pub stdin: bool,
}

impl LintArgs {
    /// Config values given on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            schema_paths: self.schema_paths.clone(),
            rules: self.rules.clone(),
            exclude_rules: self.exclude_rules.clone(),
            custom_rule_paths: self.custom_rule_paths.clone(),
            ignore_marker: self.ignore_marker.clone(),
            format: self.format,
        }
    }
}

/// Arguments for the `rules` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RulesArgs {
    /// Only list these built-in rules (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub rules: Option<Vec<String>>,

    /// Leave out these rules (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub exclude_rules: Option<Vec<String>>,

    /// Directories containing plugin rules (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub custom_rule_paths: Option<Vec<PathBuf>>,
}

impl RulesArgs {
    /// Config values given on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            rules: self.rules.clone(),
            exclude_rules: self.exclude_rules.clone(),
            custom_rule_paths: self.custom_rule_paths.clone(),
            ..Default::default()
        }
    }
}
