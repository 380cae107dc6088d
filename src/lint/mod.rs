//! GraphQL schema linting.
//!
//! This module runs a pluggable, rule-based analysis over a parsed
//! [`Schema`](crate::schema::Schema).
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Rules** - Individual checks ([`LintRule`] trait), built-in or loaded
//!   from plugin executables ([`plugin`])
//! - **Registry** - Every known rule keyed by name ([`RuleRegistry`]),
//!   resolved into the rules to run ([`ActiveRuleSet`])
//! - **Runner** - Executes the active rules in parallel ([`RuleRunner`])
//!   and applies ignore markers ([`SuppressionSet`])
//! - **Output** - Text, JSON and SARIF formatters ([`output`])
//!
//! # Example
//!
//! ```
//! use gqlint::lint::{RuleRegistry, RuleRunner, DEFAULT_IGNORE_MARKER};
//! use gqlint::schema::{parse_sources, SourceFile};
//!
//! let sources = vec![SourceFile::new(
//!     "schema.graphql",
//!     "\"Root\"\ntype Query {\n  name: String\n}\n",
//! )];
//! let schema = parse_sources(&sources).unwrap();
//!
//! let registry = RuleRegistry::with_builtins().unwrap();
//! let (active, warnings) = registry.resolve(&["fields-have-descriptions".to_string()], &[]);
//! assert!(warnings.is_empty());
//!
//! let report = RuleRunner::new().run(&schema, &sources, &active, DEFAULT_IGNORE_MARKER);
//! assert_eq!(report.diagnostics.len(), 1);
//! assert_eq!(report.diagnostics[0].location.line, 3);
//! ```

pub mod diagnostic;
pub mod ignore;
pub mod output;
pub mod plugin;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod runner;
pub mod warning;

pub use diagnostic::LintDiagnostic;
pub use ignore::{SuppressionSet, DEFAULT_IGNORE_MARKER};
pub use output::{
    render, sorted, JsonFormatter, LintFormatter, OutputFormat, SarifFormatter, TextFormatter,
};
pub use plugin::{ExternalRule, PluginLoader};
pub use registry::{ActiveRuleSet, RuleOrigin, RuleRegistry};
pub use rule::{LintRule, RuleId};
pub use runner::{LintReport, RuleRunner};
pub use warning::LintWarning;
