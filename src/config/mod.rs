//! Configuration loading, parsing, and validation for gqlint.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use gqlint::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".gqlint.yml"), "rules: [types-have-descriptions]").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.rules, vec!["types-have-descriptions".to_string()]);
//! ```
//!
//! # Precedence
//!
//! 1. Built-in defaults
//! 2. Project config (`.gqlint.yml` at the project root, or `--config`)
//! 3. Command-line flags

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{find_project_root, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{config_json_schema, ConfigOverrides, LintConfig};
pub use validator::{validate, validate_config, ValidationError};
