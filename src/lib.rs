//! gqlint - A pluggable GraphQL schema linter.
//!
//! gqlint parses GraphQL SDL, runs a configurable set of lint rules over it
//! (built-in rules plus out-of-process plugins) and reports diagnostics as
//! text, JSON or SARIF.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Rules, registry, runner, plugins and output formatters
//! - [`schema`] - SDL parsing into a position-tagged schema model
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use gqlint::lint::{render, OutputFormat, RuleRegistry, RuleRunner};
//! use gqlint::schema::{parse_sources, SourceFile};
//!
//! let sources = vec![SourceFile::new("schema.graphql", "type Query {\n  a: String\n}\n")];
//! let schema = parse_sources(&sources).unwrap();
//!
//! let registry = RuleRegistry::with_builtins().unwrap();
//! let (active, _) = registry.resolve(&["types-have-descriptions".to_string()], &[]);
//! let report = RuleRunner::new().run(&schema, &sources, &active, "lint-ignore");
//!
//! let text = render(OutputFormat::Text, &report.diagnostics, false, &active.descriptions()).unwrap();
//! assert_eq!(
//!     text,
//!     "schema.graphql:1:1: The object type `Query` is missing a description. (types-have-descriptions)\n"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod lint;
pub mod schema;
pub mod ui;

pub use error::{GqlintError, Result};
