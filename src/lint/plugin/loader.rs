//! Plugin discovery and registration.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use super::external::ExternalRule;
use super::process::{invoke, PluginError};
use super::protocol::DescribeResponse;
use crate::lint::{LintRule, LintWarning, RuleRegistry};

/// Default limit for a single plugin invocation.
pub const DEFAULT_PLUGIN_TIMEOUT: Duration = Duration::from_secs(30);

/// Discovers plugin executables and registers them as rules.
///
/// Loading never fails as a whole: every problem with a directory or a
/// candidate becomes a [`LintWarning::PluginLoad`] and loading moves on.
#[derive(Debug, Clone)]
pub struct PluginLoader {
    timeout: Duration,
}

impl Default for PluginLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginLoader {
    /// Create a loader with the default timeout.
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_PLUGIN_TIMEOUT,
        }
    }

    /// Use `timeout` for `describe` and for every later `check` call.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Timeout applied to each plugin invocation.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Load every plugin directory in order.
    pub fn load_dirs(&self, registry: &mut RuleRegistry, dirs: &[PathBuf]) -> Vec<LintWarning> {
        dirs.iter()
            .flat_map(|dir| self.load_dir(registry, dir))
            .collect()
    }

    /// Load the plugins found directly inside `dir`.
    pub fn load_dir(&self, registry: &mut RuleRegistry, dir: &Path) -> Vec<LintWarning> {
        let candidates = match candidates(dir) {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::warn!("Cannot read plugin directory {}: {}", dir.display(), e);
                return vec![LintWarning::PluginLoad {
                    path: dir.to_path_buf(),
                    message: format!("cannot read directory: {e}"),
                }];
            }
        };

        let mut warnings = Vec::new();
        for path in candidates {
            match self.describe(&path) {
                Ok(rule) => {
                    tracing::debug!("Loaded plugin rule '{}' from {}", rule.name(), path.display());
                    if let Some(warning) = registry.register_dynamic(Arc::new(rule), path) {
                        warnings.push(warning);
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to load plugin {}: {}", path.display(), e);
                    warnings.push(LintWarning::PluginLoad {
                        path,
                        message: e.to_string(),
                    });
                }
            }
        }
        warnings
    }

    /// Ask one candidate to describe itself.
    pub fn describe(&self, path: &Path) -> Result<ExternalRule, PluginError> {
        let stdout = invoke(path, "describe", None, self.timeout)?;
        let described = DescribeResponse::parse(&stdout).map_err(PluginError::InvalidResponse)?;
        Ok(ExternalRule::new(described, path.to_path_buf(), self.timeout))
    }
}

/// Regular, non-hidden files directly inside `dir`, sorted by file name.
fn candidates(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        let path = entry.path();
        if !hidden && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}
