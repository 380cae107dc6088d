//! Lint output formatters.
//!
//! This module provides formatters for outputting lint diagnostics
//! in different formats (text, JSON, SARIF). Every formatter renders
//! diagnostics in [`sorted`] order so output is reproducible.

pub mod json;
pub mod sarif;
pub mod text;

use crate::lint::LintDiagnostic;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;

/// Output format for lint results.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `file:line:column: message (rule)`, one per line.
    #[default]
    Text,
    /// `{"errors": [...]}` document.
    Json,
    /// SARIF 2.1.0 log.
    Sarif,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Sarif => write!(f, "sarif"),
        }
    }
}

/// Trait for formatting lint output.
pub trait LintFormatter {
    /// Format diagnostics to the given writer.
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()>;
}

/// Diagnostics in presentation order: file, line, column, rule, message.
pub fn sorted(diagnostics: &[LintDiagnostic]) -> Vec<&LintDiagnostic> {
    let mut sorted: Vec<_> = diagnostics.iter().collect();
    sorted.sort_by(|a, b| a.presentation_cmp(b));
    sorted
}

/// Render diagnostics to a string in the given format.
///
/// `rule_descriptions` feeds the SARIF rule descriptors; other formats ignore it.
pub fn render(
    format: OutputFormat,
    diagnostics: &[LintDiagnostic],
    use_color: bool,
    rule_descriptions: &BTreeMap<String, String>,
) -> std::io::Result<String> {
    let mut output = Vec::new();
    match format {
        OutputFormat::Text => TextFormatter::new(use_color).format(diagnostics, &mut output)?,
        OutputFormat::Json => JsonFormatter::new().format(diagnostics, &mut output)?,
        OutputFormat::Sarif => SarifFormatter::new("gqlint", env!("CARGO_PKG_VERSION"))
            .with_rule_descriptions(rule_descriptions.clone())
            .format(diagnostics, &mut output)?,
    }
    String::from_utf8(output).map_err(std::io::Error::other)
}

pub use json::JsonFormatter;
pub use sarif::SarifFormatter;
pub use text::TextFormatter;
