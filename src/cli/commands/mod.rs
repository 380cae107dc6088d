//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`gqlint lint`, `gqlint rules`)
//! - Shared config and registry setup
//! - Consistent global flag handling

pub mod config_schema;
pub mod dispatcher;
pub mod lint;
pub mod rules;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, EXIT_FAILURE, EXIT_FINDINGS};
