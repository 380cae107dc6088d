//! Error types for gqlint operations.
//!
//! This module defines [`GqlintError`], the error type for failures that stop
//! a lint run before any rule executes, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - Use `GqlintError` for fatal conditions (unreadable config, unparsable schema)
//! - Use [`crate::lint::LintWarning`] for failures isolated to one rule or plugin
//! - Use `anyhow::Error` (via `GqlintError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gqlint operations.
#[derive(Debug, Error)]
pub enum GqlintError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A schema path or glob did not match any file.
    #[error("No schema files matched: {pattern}")]
    SchemaNotFound { pattern: String },

    /// SDL could not be parsed.
    #[error("Failed to parse schema {file}: {message}")]
    SchemaParseError { file: String, message: String },

    /// A built-in rule was registered twice.
    #[error("Rule '{name}' is already registered")]
    DuplicateRule { name: String },

    /// A rule's check failed.
    #[error("Rule '{rule}' failed: {message}")]
    RuleExecution { rule: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for gqlint operations.
pub type Result<T> = std::result::Result<T, GqlintError>;
