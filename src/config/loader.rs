//! Configuration file discovery and loading.
//!
//! A project is marked by a `.gqlint.yml` file or, failing that, a `.git`
//! directory. The config file is optional: without one every setting takes
//! its default.

use crate::config::schema::LintConfig;
use crate::error::{GqlintError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = ".gqlint.yml";

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. `.gqlint.yml` file (primary indicator)
/// 2. `.git` directory (fallback)
///
/// # Returns
///
/// The path to the project root, or None if not found.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_FILE_NAME).is_file() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file and parse it into LintConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<LintConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GqlintError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GqlintError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into LintConfig.
///
/// An empty file yields the default configuration.
pub fn parse_config(content: &str, source_path: &Path) -> Result<LintConfig> {
    if content.trim().is_empty() {
        return Ok(LintConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| GqlintError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, that file must exist. Otherwise
/// `.gqlint.yml` in the project root is used when present.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<LintConfig> {
    if let Some(override_path) = config_override {
        return load_config_file(override_path);
    }

    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        tracing::debug!("Loading config from {}", path.display());
        load_config_file(&path)
    } else {
        tracing::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, project_root.display());
        Ok(LintConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn find_project_root_finds_config_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "").unwrap();
        let nested = temp.path().join("schema").join("types");
        fs::create_dir_all(&nested).unwrap();

        let root = find_project_root(&nested);

        assert_eq!(root, Some(temp.path().to_path_buf()));
    }

    #[test]
    fn find_project_root_finds_git_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();

        let root = find_project_root(temp.path());

        assert_eq!(root, Some(temp.path().to_path_buf()));
    }

    #[test]
    fn find_project_root_prefers_nearest_marker() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        let sub = temp.path().join("api");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join(CONFIG_FILE_NAME), "").unwrap();

        assert_eq!(find_project_root(&sub), Some(sub.clone()));
    }

    #[test]
    fn load_config_file_returns_not_found_error() {
        let result = load_config_file(Path::new("/nonexistent/.gqlint.yml"));
        assert!(matches!(result, Err(GqlintError::ConfigNotFound { .. })));
    }

    #[test]
    fn parse_config_returns_parse_error_for_invalid_yaml() {
        let result = parse_config("rules: [unclosed", Path::new(".gqlint.yml"));
        assert!(matches!(result, Err(GqlintError::ConfigParseError { .. })));
    }

    #[test]
    fn load_config_file_handles_empty_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "").unwrap();

        let config = load_config_file(&path).unwrap();

        assert_eq!(config, LintConfig::default());
    }

    #[test]
    fn load_config_uses_project_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "format: sarif\n").unwrap();

        let config = load_config(temp.path(), None).unwrap();

        assert_eq!(config.format, OutputFormat::Sarif);
    }

    #[test]
    fn load_config_without_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, LintConfig::default());
    }

    #[test]
    fn load_config_with_override_requires_file() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("custom.yml");

        let result = load_config(temp.path(), Some(&missing));

        assert!(matches!(result, Err(GqlintError::ConfigNotFound { .. })));
    }
}
