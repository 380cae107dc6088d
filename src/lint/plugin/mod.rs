//! Out-of-process rule plugins.
//!
//! A plugin is any executable file placed in a configured plugin directory.
//! It is asked to `describe` itself once at load time and is then run with
//! `check` on every lint run, exchanging JSON over stdin/stdout (see
//! [`protocol`]).
//!
//! Plugins run with the privileges of the gqlint process. Only the shape of
//! their replies is validated.

pub mod external;
pub mod loader;
pub mod process;
pub mod protocol;

pub use external::ExternalRule;
pub use loader::{PluginLoader, DEFAULT_PLUGIN_TIMEOUT};
pub use process::PluginError;
pub use protocol::{CheckRequest, CheckResponse, DescribeResponse, PROTOCOL_VERSION};
