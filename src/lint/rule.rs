//! Lint rule definitions.
//!
//! This module provides the core trait and types for defining lint rules:
//!
//! - [`LintRule`] - The trait that every rule, built-in or plugin, implements
//! - [`RuleId`] - Unique identifier for a lint rule

use super::diagnostic::LintDiagnostic;
use crate::error::Result;
use crate::schema::{Location, Schema};

/// Unique identifier for a lint rule (its kebab-case name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the ID as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether `name` is a valid rule name: lowercase ASCII words joined by `-`.
pub fn is_valid_rule_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('-').all(|part| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

/// A lint rule that checks a parsed schema.
///
/// `check` must behave as a pure function of the schema: no state shared
/// between calls and no I/O (plugin rules are the documented exception, see
/// [`crate::lint::plugin`]). The runner calls `check` for several rules at
/// once from worker threads.
pub trait LintRule: Send + Sync {
    /// Unique kebab-case name of this rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Check the schema and return any diagnostics.
    fn check(&self, schema: &Schema) -> Result<Vec<LintDiagnostic>>;

    /// Identifier derived from [`LintRule::name`].
    fn id(&self) -> RuleId {
        RuleId::new(self.name())
    }

    /// Build a diagnostic attributed to this rule.
    fn diagnostic(&self, message: String, location: &Location) -> LintDiagnostic {
        LintDiagnostic::new(self.id(), message, location.clone())
    }
}
