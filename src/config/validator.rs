//! Configuration validation.
//!
//! This module validates settings that parse but cannot work:
//! - The plugin timeout must be positive
//! - The ignore marker must fit on one line
//! - Rule names must be kebab-case

use crate::config::schema::LintConfig;
use crate::error::{GqlintError, Result};
use crate::lint::rule::is_valid_rule_name;

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Config field the error refers to
    pub field: &'static str,
    /// Human-readable error message
    pub message: String,
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &LintConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.plugin_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "plugin_timeout_secs",
            message: "plugin_timeout_secs must be greater than zero".to_string(),
        });
    }

    if config.ignore_marker.contains('\n') {
        errors.push(ValidationError {
            field: "ignore_marker",
            message: "ignore_marker must not contain a newline".to_string(),
        });
    }

    for (field, names) in [
        ("rules", &config.rules),
        ("exclude_rules", &config.exclude_rules),
    ] {
        for name in names.iter().filter(|n| !is_valid_rule_name(n)) {
            errors.push(ValidationError {
                field,
                message: format!("'{}' in {} is not a valid rule name", name, field),
            });
        }
    }

    errors
}

/// Validate a configuration, failing on the first batch of errors.
pub fn validate(config: &LintConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(GqlintError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&LintConfig::default()).is_ok());
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = LintConfig {
            plugin_timeout_secs: 0,
            ..Default::default()
        };

        let errors = validate_config(&config);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "plugin_timeout_secs");
    }

    #[test]
    fn rejects_multiline_marker() {
        let config = LintConfig {
            ignore_marker: "a\nb".into(),
            ..Default::default()
        };
        assert_eq!(validate_config(&config)[0].field, "ignore_marker");
    }

    #[test]
    fn empty_marker_is_allowed() {
        let config = LintConfig {
            ignore_marker: String::new(),
            ..Default::default()
        };
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn collects_all_errors() {
        let config = LintConfig {
            plugin_timeout_secs: 0,
            rules: vec!["Bad Name".into()],
            exclude_rules: vec!["also_bad".into()],
            ..Default::default()
        };

        let err = validate(&config).unwrap_err().to_string();

        assert!(err.contains("plugin_timeout_secs"));
        assert!(err.contains("'Bad Name' in rules"));
        assert!(err.contains("'also_bad' in exclude_rules"));
    }
}
