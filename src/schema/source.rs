//! Schema source files.
//!
//! The linter keeps the raw text of every schema file next to the parsed
//! [`Schema`](super::Schema): ignore markers are found in the text, not in
//! the syntax tree.

use std::io::Read;
use std::path::{Path, PathBuf};

use glob::glob;

use crate::error::{GqlintError, Result};

/// Display name used for schema text read from standard input.
pub const STDIN_FILE_NAME: &str = "stdin.graphql";

/// Raw text of one schema file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path as it appears in diagnostics.
    pub path: String,
    /// Full file contents.
    pub text: String,
}

impl SourceFile {
    /// Create a source from in-memory text.
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Read a source file from disk.
    ///
    /// Diagnostics name the file relative to `root` when it lies inside it.
    pub fn read(path: &Path, root: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let display = path.strip_prefix(root).unwrap_or(path);
        Ok(Self::new(display.display().to_string(), text))
    }

    /// Read schema text from a reader (usually stdin).
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::new(STDIN_FILE_NAME, text))
    }
}

/// Expand schema paths and globs into a sorted, de-duplicated file list.
///
/// Relative patterns are resolved against `root`. A pattern that matches
/// no file is an error.
pub fn expand_schema_paths(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let absolute = if Path::new(pattern).is_absolute() {
            PathBuf::from(pattern)
        } else {
            root.join(pattern)
        };
        let absolute = absolute.to_string_lossy().to_string();

        let entries = glob(&absolute).map_err(|e| GqlintError::ConfigValidationError {
            message: format!("invalid schema path pattern '{}': {}", pattern, e),
        })?;

        let before = files.len();
        for entry in entries.map_while(std::result::Result::ok) {
            if entry.is_file() {
                files.push(entry);
            }
        }

        if files.len() == before {
            return Err(GqlintError::SchemaNotFound {
                pattern: pattern.clone(),
            });
        }
    }

    files.sort();
    files.dedup();
    tracing::debug!("Expanded schema paths to {} file(s)", files.len());
    Ok(files)
}
