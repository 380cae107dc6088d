//! Human-readable output formatter.
//!
//! One line per diagnostic: `<file>:<line>:<column>: <message> (<rule>)`.

use super::{sorted, LintFormatter};
use crate::lint::LintDiagnostic;
use console::Style;
use std::io::Write;

/// Formats lint output for terminals and logs.
pub struct TextFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl TextFormatter {
    /// Create a new text formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl LintFormatter for TextFormatter {
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let location_style = Style::new().bold().force_styling(self.use_color);
        let rule_style = Style::new().dim().force_styling(self.use_color);

        for diag in sorted(diagnostics) {
            writeln!(
                writer,
                "{}: {} {}",
                location_style.apply_to(&diag.location),
                diag.message,
                rule_style.apply_to(format!("({})", diag.rule_id)),
            )?;
        }

        Ok(())
    }
}
