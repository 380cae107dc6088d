//! Lint diagnostic messages.
//!
//! This module provides the [`LintDiagnostic`] type for representing
//! findings produced by lint rules, each attributed to a rule and anchored
//! at a schema [`Location`].

use std::cmp::Ordering;

use super::rule::RuleId;
use crate::schema::Location;

/// A finding produced by a lint rule.
///
/// Diagnostics are never mutated once a rule returns them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LintDiagnostic {
    /// The rule that produced this diagnostic.
    pub rule_id: RuleId,
    /// Human-readable message.
    pub message: String,
    /// Where the finding is located.
    pub location: Location,
}

impl LintDiagnostic {
    /// Create a new diagnostic.
    pub fn new(rule_id: RuleId, message: impl Into<String>, location: Location) -> Self {
        Self {
            rule_id,
            message: message.into(),
            location,
        }
    }

    /// Presentation order: file, line, column, rule, message.
    pub fn presentation_cmp(&self, other: &Self) -> Ordering {
        self.location
            .cmp(&other.location)
            .then_with(|| self.rule_id.0.cmp(&other.rule_id.0))
            .then_with(|| self.message.cmp(&other.message))
    }
}
