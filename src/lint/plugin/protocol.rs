//! JSON messages exchanged with plugin executables.
//!
//! A plugin is invoked twice per lifecycle:
//!
//! ```text
//! <plugin> describe   -> stdout: {"protocol": 1, "name": "...", "description": "..."}
//! <plugin> check      <- stdin:  {"protocol": 1, "schema": {...}}
//!                     -> stdout: {"diagnostics": [{"message": "...", "location": {...}}]}
//! ```

use serde::{Deserialize, Serialize};

use crate::lint::rule::is_valid_rule_name;
use crate::schema::{Location, Schema};

/// Protocol version spoken by this build.
pub const PROTOCOL_VERSION: u32 = 1;

/// Reply to `describe`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DescribeResponse {
    pub protocol: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl DescribeResponse {
    /// Parse and validate a `describe` reply.
    pub fn parse(stdout: &str) -> Result<Self, String> {
        let response: Self =
            serde_json::from_str(stdout.trim()).map_err(|e| format!("invalid describe output: {e}"))?;

        if response.protocol != PROTOCOL_VERSION {
            return Err(format!(
                "unsupported protocol version {} (expected {})",
                response.protocol, PROTOCOL_VERSION
            ));
        }
        if !is_valid_rule_name(&response.name) {
            return Err(format!(
                "invalid rule name '{}' (expected kebab-case)",
                response.name
            ));
        }

        Ok(response)
    }
}

/// Payload written to the plugin's stdin for `check`.
#[derive(Debug, Serialize)]
pub struct CheckRequest<'a> {
    pub protocol: u32,
    pub schema: &'a Schema,
}

impl<'a> CheckRequest<'a> {
    /// Wrap `schema` in a request for the current protocol version.
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            protocol: PROTOCOL_VERSION,
            schema,
        }
    }
}

/// Reply to `check`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CheckResponse {
    #[serde(default)]
    pub diagnostics: Vec<PluginDiagnostic>,
}

impl CheckResponse {
    /// Parse the stdout of a `check` invocation.
    pub fn parse(stdout: &str) -> Result<Self, String> {
        serde_json::from_str(stdout.trim()).map_err(|e| format!("invalid check output: {e}"))
    }
}

/// One finding reported by a plugin. The rule name is not part of the
/// message; findings are always attributed to the plugin's described name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PluginDiagnostic {
    pub message: String,
    pub location: Location,
}
