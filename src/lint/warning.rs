//! Non-fatal problems collected during a lint run.
//!
//! A [`LintWarning`] never aborts a run. Callers print warnings next to the
//! diagnostics; only diagnostics decide whether findings were reported.

use std::path::PathBuf;
use thiserror::Error;

/// An operational problem isolated to one rule, plugin or rule name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LintWarning {
    /// A rule's check returned an error or panicked.
    #[error("rule '{rule}' failed: {message}")]
    RuleExecution { rule: String, message: String },

    /// A plugin candidate could not be loaded.
    #[error("failed to load plugin {}: {message}", path.display())]
    PluginLoad { path: PathBuf, message: String },

    /// A configured rule name matched no registered rule.
    #[error("unknown rule '{name}'")]
    UnknownRule { name: String },

    /// A plugin replaced an already registered rule.
    #[error("plugin {} overrides rule '{name}'", path.display())]
    RuleOverridden { name: String, path: PathBuf },
}
