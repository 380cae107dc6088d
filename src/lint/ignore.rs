//! Ignore-marker suppression.
//!
//! A source line containing the ignore marker suppresses every diagnostic
//! located on that same line. The match is textual: a marker inside a
//! description string counts too.
//!
//! ```graphql
//! type Query {
//!   legacy_field: String # lint-ignore
//! }
//! ```

use std::collections::HashSet;

use super::diagnostic::LintDiagnostic;
use crate::schema::{Location, SourceFile};

/// Marker used when the configuration does not set one.
pub const DEFAULT_IGNORE_MARKER: &str = "lint-ignore";

/// The `(file, line)` pairs whose diagnostics are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuppressionSet {
    lines: HashSet<(String, usize)>,
}

impl SuppressionSet {
    /// Scan sources for lines containing `marker`.
    ///
    /// An empty marker suppresses nothing.
    pub fn scan(sources: &[SourceFile], marker: &str) -> Self {
        let mut lines = HashSet::new();
        if marker.is_empty() {
            return Self { lines };
        }

        for source in sources {
            for (index, line) in source.text.lines().enumerate() {
                if line.contains(marker) {
                    lines.insert((source.path.clone(), index + 1));
                }
            }
        }

        tracing::debug!("Found {} suppressed line(s)", lines.len());
        Self { lines }
    }

    /// Whether a diagnostic at `location` is suppressed.
    pub fn is_suppressed(&self, location: &Location) -> bool {
        self.lines
            .contains(&(location.file.clone(), location.line))
    }

    /// Drop suppressed diagnostics.
    pub fn filter(&self, diagnostics: Vec<LintDiagnostic>) -> Vec<LintDiagnostic> {
        if self.lines.is_empty() {
            return diagnostics;
        }
        diagnostics
            .into_iter()
            .filter(|d| !self.is_suppressed(&d.location))
            .collect()
    }

    /// Number of suppressed lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether no line is suppressed.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::RuleId;

    fn diag(file: &str, line: usize) -> LintDiagnostic {
        LintDiagnostic::new(RuleId::new("r"), "m", Location::new(file, line, 1))
    }

    #[test]
    fn marks_exact_lines() {
        let source = SourceFile::new("s.graphql", "type A {\n  a: String # lint-ignore\n}\n");

        let set = SuppressionSet::scan(&[source], DEFAULT_IGNORE_MARKER);

        assert_eq!(set.len(), 1);
        assert!(set.is_suppressed(&Location::new("s.graphql", 2, 3)));
        assert!(!set.is_suppressed(&Location::new("s.graphql", 1, 1)));
        assert!(!set.is_suppressed(&Location::new("s.graphql", 3, 1)));
    }

    #[test]
    fn suppression_is_per_file() {
        let a = SourceFile::new("a.graphql", "# lint-ignore\n");
        let b = SourceFile::new("b.graphql", "scalar B\n");

        let set = SuppressionSet::scan(&[a, b], DEFAULT_IGNORE_MARKER);

        assert!(set.is_suppressed(&Location::new("a.graphql", 1, 1)));
        assert!(!set.is_suppressed(&Location::new("b.graphql", 1, 1)));
    }

    #[test]
    fn repeated_markers_are_idempotent() {
        let source = SourceFile::new("s.graphql", "scalar A # lint-ignore lint-ignore\n");

        let set = SuppressionSet::scan(&[source], DEFAULT_IGNORE_MARKER);

        assert_eq!(set.len(), 1);
    }

    #[test]
    fn marker_inside_description_still_counts() {
        let source = SourceFile::new("s.graphql", "\"mentions lint-ignore\" scalar A\n");

        let set = SuppressionSet::scan(&[source], DEFAULT_IGNORE_MARKER);

        assert!(set.is_suppressed(&Location::new("s.graphql", 1, 24)));
    }

    #[test]
    fn does_not_suppress_following_line() {
        let source = SourceFile::new("s.graphql", "# lint-ignore\ntype A\n");

        let set = SuppressionSet::scan(&[source], DEFAULT_IGNORE_MARKER);

        assert!(!set.is_suppressed(&Location::new("s.graphql", 2, 1)));
    }

    #[test]
    fn custom_marker() {
        let source = SourceFile::new("s.graphql", "scalar A # nolint\nscalar B # lint-ignore\n");

        let set = SuppressionSet::scan(&[source], "nolint");

        assert!(set.is_suppressed(&Location::new("s.graphql", 1, 1)));
        assert!(!set.is_suppressed(&Location::new("s.graphql", 2, 1)));
    }

    #[test]
    fn empty_marker_suppresses_nothing() {
        let source = SourceFile::new("s.graphql", "scalar A\n");

        let set = SuppressionSet::scan(&[source], "");

        assert!(set.is_empty());
    }

    #[test]
    fn filter_drops_only_suppressed_diagnostics() {
        let source = SourceFile::new("s.graphql", "a\nb # lint-ignore\nc\n");
        let set = SuppressionSet::scan(&[source], DEFAULT_IGNORE_MARKER);

        let kept = set.filter(vec![diag("s.graphql", 1), diag("s.graphql", 2), diag("s.graphql", 3)]);

        assert_eq!(
            kept.iter().map(|d| d.location.line).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }
}
