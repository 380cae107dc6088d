//! Rules backed by a plugin executable.

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::process::{invoke, PluginError};
use super::protocol::{CheckRequest, CheckResponse, DescribeResponse};
use crate::error::Result;
use crate::lint::{LintDiagnostic, LintRule};
use crate::schema::Schema;

/// A lint rule whose `check` runs an external process.
///
/// Unlike built-in rules, checking performs I/O: every call spawns the
/// plugin once.
#[derive(Debug, Clone)]
pub struct ExternalRule {
    name: String,
    description: String,
    path: PathBuf,
    timeout: Duration,
}

impl ExternalRule {
    /// Build a rule from a validated `describe` reply.
    pub fn new(described: DescribeResponse, path: PathBuf, timeout: Duration) -> Self {
        Self {
            name: described.name,
            description: described.description,
            path,
            timeout,
        }
    }

    /// Path of the plugin executable.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn run_check(&self, schema: &Schema) -> std::result::Result<Vec<LintDiagnostic>, PluginError> {
        let request = serde_json::to_vec(&CheckRequest::new(schema))
            .map_err(|e| PluginError::InvalidResponse(format!("failed to encode schema: {e}")))?;

        let stdout = invoke(&self.path, "check", Some(request), self.timeout)?;
        let response = CheckResponse::parse(&stdout).map_err(PluginError::InvalidResponse)?;

        Ok(response
            .diagnostics
            .into_iter()
            .map(|d| self.diagnostic(d.message, &d.location))
            .collect())
    }
}

impl LintRule for ExternalRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn check(&self, schema: &Schema) -> Result<Vec<LintDiagnostic>> {
        Ok(self.run_check(schema).map_err(anyhow::Error::from)?)
    }
}
