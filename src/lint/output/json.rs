//! JSON output formatter.
//!
//! Formats lint diagnostics as machine-readable JSON for tooling integration:
//!
//! ```json
//! {"errors": [{"message": "...", "rule": "...", "location": {"file": "...", "line": 1, "column": 1}}]}
//! ```
//!
//! Fields may be added in later versions; existing fields keep their shape.

use super::{sorted, LintFormatter};
use crate::lint::LintDiagnostic;
use serde::Serialize;
use std::io::Write;

/// Formats lint output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    errors: Vec<JsonDiagnostic<'a>>,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    message: &'a str,
    rule: &'a str,
    location: JsonLocation<'a>,
}

#[derive(Serialize)]
struct JsonLocation<'a> {
    file: &'a str,
    line: usize,
    column: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let errors = sorted(diagnostics)
            .into_iter()
            .map(|d| JsonDiagnostic {
                message: &d.message,
                rule: d.rule_id.as_str(),
                location: JsonLocation {
                    file: &d.location.file,
                    line: d.location.line,
                    column: d.location.column,
                },
            })
            .collect();

        serde_json::to_writer_pretty(&mut *writer, &JsonOutput { errors })
            .map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
