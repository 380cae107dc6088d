//! Rule execution.
//!
//! The [`RuleRunner`] calls every active rule against one shared schema,
//! isolates failures per rule, merges the results and applies ignore-marker
//! suppression. Ordering for display is left to the formatters.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;

use super::diagnostic::LintDiagnostic;
use super::ignore::SuppressionSet;
use super::registry::ActiveRuleSet;
use super::rule::LintRule;
use super::warning::LintWarning;
use crate::schema::{Schema, SourceFile};

/// Outcome of a lint run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    /// Diagnostics that survived suppression, unsorted.
    pub diagnostics: Vec<LintDiagnostic>,
    /// Non-fatal problems encountered while running rules.
    pub warnings: Vec<LintWarning>,
}

impl LintReport {
    /// Whether any diagnostic was reported.
    pub fn has_findings(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Add warnings collected outside the runner (plugin loading, rule resolution).
    pub fn with_warnings(mut self, warnings: impl IntoIterator<Item = LintWarning>) -> Self {
        let own = std::mem::take(&mut self.warnings);
        self.warnings = warnings.into_iter().chain(own).collect();
        self
    }
}

/// Runs active rules against a schema.
#[derive(Debug, Clone)]
pub struct RuleRunner {
    parallel: bool,
}

impl RuleRunner {
    /// Create a runner that checks rules in parallel.
    pub fn new() -> Self {
        Self { parallel: true }
    }

    /// Create a runner that checks rules one after another.
    pub fn sequential() -> Self {
        Self { parallel: false }
    }

    /// Run `rules` against `schema`, dropping diagnostics on lines of
    /// `sources` that contain `ignore_marker`.
    pub fn run(
        &self,
        schema: &Schema,
        sources: &[SourceFile],
        rules: &ActiveRuleSet,
        ignore_marker: &str,
    ) -> LintReport {
        let slots: Vec<RuleOutcome> = if self.parallel {
            rules
                .as_slice()
                .par_iter()
                .map(|rule| run_rule(rule, schema))
                .collect()
        } else {
            rules
                .as_slice()
                .iter()
                .map(|rule| run_rule(rule, schema))
                .collect()
        };

        let mut diagnostics = Vec::new();
        let mut warnings = Vec::new();
        for slot in slots {
            match slot {
                Ok(found) => diagnostics.extend(found),
                Err(warning) => warnings.push(warning),
            }
        }

        let suppressions = SuppressionSet::scan(sources, ignore_marker);
        let total = diagnostics.len();
        let diagnostics = suppressions.filter(diagnostics);
        tracing::debug!(
            "Rules produced {} diagnostic(s), {} suppressed",
            total,
            total - diagnostics.len()
        );

        LintReport {
            diagnostics,
            warnings,
        }
    }
}

impl Default for RuleRunner {
    fn default() -> Self {
        Self::new()
    }
}

type RuleOutcome = std::result::Result<Vec<LintDiagnostic>, LintWarning>;

/// Run one rule, turning errors and panics into a warning.
fn run_rule(rule: &Arc<dyn LintRule>, schema: &Schema) -> RuleOutcome {
    let start = Instant::now();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| rule.check(schema)));
    tracing::debug!("Rule '{}' finished in {:?}", rule.name(), start.elapsed());

    match outcome {
        Ok(Ok(diagnostics)) => Ok(diagnostics),
        Ok(Err(e)) => Err(LintWarning::RuleExecution {
            rule: rule.name().to_string(),
            message: e.to_string(),
        }),
        Err(payload) => Err(LintWarning::RuleExecution {
            rule: rule.name().to_string(),
            message: format!("panicked: {}", panic_message(payload.as_ref())),
        }),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GqlintError, Result};
    use crate::lint::RuleId;
    use crate::schema::{Location, TypeDefinition, TypeKind};

    /// Reports one diagnostic per type, at the type's location.
    struct PerTypeRule(&'static str);

    impl LintRule for PerTypeRule {
        fn name(&self) -> &str {
            self.0
        }
        fn description(&self) -> &str {
            "Reports every type"
        }
        fn check(&self, schema: &Schema) -> Result<Vec<LintDiagnostic>> {
            Ok(schema
                .types
                .iter()
                .map(|t| self.diagnostic(format!("saw {}", t.name), &t.location))
                .collect())
        }
    }

    struct PanickingRule;

    impl LintRule for PanickingRule {
        fn name(&self) -> &str {
            "panicking"
        }
        fn description(&self) -> &str {
            "Always panics"
        }
        fn check(&self, _schema: &Schema) -> Result<Vec<LintDiagnostic>> {
            panic!("rule bug")
        }
    }

    struct FailingRule;

    impl LintRule for FailingRule {
        fn name(&self) -> &str {
            "failing"
        }
        fn description(&self) -> &str {
            "Always errors"
        }
        fn check(&self, _schema: &Schema) -> Result<Vec<LintDiagnostic>> {
            Err(GqlintError::RuleExecution {
                rule: "failing".into(),
                message: "bad response".into(),
            })
        }
    }

    fn schema() -> Schema {
        Schema {
            types: vec![
                TypeDefinition::new(TypeKind::Object, "A", Location::new("s.graphql", 1, 1)),
                TypeDefinition::new(TypeKind::Object, "B", Location::new("s.graphql", 2, 1)),
            ],
            ..Default::default()
        }
    }

    fn sorted(mut diagnostics: Vec<LintDiagnostic>) -> Vec<LintDiagnostic> {
        diagnostics.sort_by(|a, b| a.presentation_cmp(b));
        diagnostics
    }

    #[test]
    fn collects_diagnostics_from_all_rules() {
        let rules = ActiveRuleSet::from_rules([
            Arc::new(PerTypeRule("one")) as Arc<dyn LintRule>,
            Arc::new(PerTypeRule("two")),
        ]);

        let report = RuleRunner::new().run(&schema(), &[], &rules, "lint-ignore");

        assert_eq!(report.diagnostics.len(), 4);
        assert!(report.warnings.is_empty());
        assert!(report.has_findings());
    }

    #[test]
    fn panicking_rule_is_isolated() {
        let rules = ActiveRuleSet::from_rules([
            Arc::new(PanickingRule) as Arc<dyn LintRule>,
            Arc::new(PerTypeRule("ok")),
        ]);

        let report = RuleRunner::new().run(&schema(), &[], &rules, "lint-ignore");

        assert_eq!(report.diagnostics.len(), 2);
        assert_eq!(report.warnings.len(), 1);
        match &report.warnings[0] {
            LintWarning::RuleExecution { rule, message } => {
                assert_eq!(rule, "panicking");
                assert!(message.contains("rule bug"));
            }
            other => panic!("unexpected warning: {other}"),
        }
    }

    #[test]
    fn failing_rule_is_reported() {
        let rules = ActiveRuleSet::from_rules([
            Arc::new(FailingRule) as Arc<dyn LintRule>,
            Arc::new(PerTypeRule("ok")),
        ]);

        let report = RuleRunner::sequential().run(&schema(), &[], &rules, "lint-ignore");

        assert_eq!(report.diagnostics.len(), 2);
        assert_eq!(
            report.warnings,
            vec![LintWarning::RuleExecution {
                rule: "failing".into(),
                message: "Rule 'failing' failed: bad response".into(),
            }]
        );
    }

    #[test]
    fn results_do_not_depend_on_rule_order_or_parallelism() {
        let forward = ActiveRuleSet::from_rules([
            Arc::new(PerTypeRule("one")) as Arc<dyn LintRule>,
            Arc::new(PerTypeRule("two")),
        ]);
        let backward = ActiveRuleSet::from_rules([
            Arc::new(PerTypeRule("two")) as Arc<dyn LintRule>,
            Arc::new(PerTypeRule("one")),
        ]);

        let a = RuleRunner::sequential().run(&schema(), &[], &forward, "lint-ignore");
        let b = RuleRunner::sequential().run(&schema(), &[], &backward, "lint-ignore");
        let c = RuleRunner::new().run(&schema(), &[], &backward, "lint-ignore");

        assert_eq!(sorted(a.diagnostics.clone()), sorted(b.diagnostics));
        assert_eq!(sorted(a.diagnostics), sorted(c.diagnostics));
    }

    #[test]
    fn applies_ignore_markers() {
        let rules = ActiveRuleSet::from_rules([Arc::new(PerTypeRule("one")) as Arc<dyn LintRule>]);
        let sources = [SourceFile::new("s.graphql", "type A # lint-ignore\ntype B\n")];

        let report = RuleRunner::new().run(&schema(), &sources, &rules, "lint-ignore");

        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].location.line, 2);
        assert_eq!(report.diagnostics[0].rule_id, RuleId::new("one"));
    }

    #[test]
    fn empty_rule_set_reports_nothing() {
        let report = RuleRunner::new().run(&schema(), &[], &ActiveRuleSet::new(), "lint-ignore");
        assert_eq!(report, LintReport::default());
    }

    #[test]
    fn with_warnings_prepends_external_warnings() {
        let report = LintReport {
            diagnostics: vec![],
            warnings: vec![LintWarning::UnknownRule { name: "b".into() }],
        }
        .with_warnings([LintWarning::UnknownRule { name: "a".into() }]);

        assert_eq!(
            report.warnings,
            vec![
                LintWarning::UnknownRule { name: "a".into() },
                LintWarning::UnknownRule { name: "b".into() },
            ]
        );
    }
}
