//! Command-line interface for gqlint.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, LintArgs, RulesArgs};
pub use commands::{Command, CommandDispatcher, CommandResult, EXIT_FAILURE, EXIT_FINDINGS};
