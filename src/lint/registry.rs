//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores every known rule, built-in or loaded from a
//! plugin, and resolves the [`ActiveRuleSet`] for a run from the configured
//! include and exclude lists.
//!
//! Registration precedence is built-in < plugin: a plugin whose name matches
//! an existing rule replaces it and the caller receives a warning.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use std::sync::Arc;

use super::rule::LintRule;
use super::rules::builtin_rules;
use super::warning::LintWarning;
use crate::error::{GqlintError, Result};

/// Where a registered rule came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOrigin {
    /// Compiled into gqlint.
    Builtin,
    /// Loaded from the plugin at this path.
    Plugin(PathBuf),
}

struct RegisteredRule {
    rule: Arc<dyn LintRule>,
    origin: RuleOrigin,
}

/// Registry of all available lint rules, keyed by name.
pub struct RuleRegistry {
    rules: BTreeMap<String, RegisteredRule>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Create a registry with all built-in rules.
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        for rule in builtin_rules() {
            registry.register_builtin(rule)?;
        }
        Ok(registry)
    }

    /// Register a built-in rule.
    ///
    /// Registering two built-ins with the same name is a programming error.
    pub fn register_builtin(&mut self, rule: Arc<dyn LintRule>) -> Result<()> {
        let name = rule.name().to_string();
        if self.rules.contains_key(&name) {
            return Err(GqlintError::DuplicateRule { name });
        }
        self.rules.insert(
            name,
            RegisteredRule {
                rule,
                origin: RuleOrigin::Builtin,
            },
        );
        Ok(())
    }

    /// Register a rule loaded from a plugin.
    ///
    /// Replaces any rule with the same name and returns a warning saying so.
    pub fn register_dynamic(
        &mut self,
        rule: Arc<dyn LintRule>,
        path: PathBuf,
    ) -> Option<LintWarning> {
        let name = rule.name().to_string();
        let previous = self.rules.insert(
            name.clone(),
            RegisteredRule {
                rule,
                origin: RuleOrigin::Plugin(path.clone()),
            },
        );
        previous.map(|_| {
            tracing::warn!("Plugin {} overrides rule '{}'", path.display(), name);
            LintWarning::RuleOverridden { name, path }
        })
    }

    /// Get a rule by name.
    pub fn get(&self, name: &str) -> Option<&dyn LintRule> {
        self.rules.get(name).map(|r| r.rule.as_ref())
    }

    /// Where the named rule came from.
    pub fn origin(&self, name: &str) -> Option<&RuleOrigin> {
        self.rules.get(name).map(|r| &r.origin)
    }

    /// Iterate over all rules in name order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.values().map(|r| r.rule.as_ref())
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Resolve the rules to run.
    ///
    /// - An empty `include` selects every built-in; otherwise only the named ones.
    /// - Plugin rules are always selected unless excluded.
    /// - Names in `exclude` are removed.
    ///
    /// Names that match no registered rule produce an [`LintWarning::UnknownRule`]
    /// and are otherwise ignored.
    pub fn resolve(
        &self,
        include: &[String],
        exclude: &[String],
    ) -> (ActiveRuleSet, Vec<LintWarning>) {
        let mut warnings = Vec::new();
        let mut reported = BTreeSet::new();
        for name in include.iter().chain(exclude) {
            if !self.rules.contains_key(name) && reported.insert(name.as_str()) {
                warnings.push(LintWarning::UnknownRule { name: name.clone() });
            }
        }

        let mut active = ActiveRuleSet::new();
        for (name, registered) in &self.rules {
            let selected = match registered.origin {
                RuleOrigin::Builtin => include.is_empty() || include.contains(name),
                RuleOrigin::Plugin(_) => true,
            };
            if selected && !exclude.contains(name) {
                active.push(Arc::clone(&registered.rule));
            }
        }

        tracing::debug!("Resolved {} active rule(s)", active.len());
        (active, warnings)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The rules selected for one run, in execution order.
#[derive(Clone, Default)]
pub struct ActiveRuleSet {
    rules: Vec<Arc<dyn LintRule>>,
}

impl ActiveRuleSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from rules in the given order.
    pub fn from_rules(rules: impl IntoIterator<Item = Arc<dyn LintRule>>) -> Self {
        let mut set = Self::new();
        for rule in rules {
            set.push(rule);
        }
        set
    }

    /// Add a rule, replacing any rule with the same name in place.
    pub fn push(&mut self, rule: Arc<dyn LintRule>) {
        match self.rules.iter_mut().find(|r| r.name() == rule.name()) {
            Some(slot) => *slot = rule,
            None => self.rules.push(rule),
        }
    }

    /// Iterate over the rules.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn LintRule>> {
        self.rules.iter()
    }

    /// Names of the rules, in order.
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Rule descriptions keyed by name.
    pub fn descriptions(&self) -> BTreeMap<String, String> {
        self.rules
            .iter()
            .map(|r| (r.name().to_string(), r.description().to_string()))
            .collect()
    }

    /// Whether a rule with this name is active.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.iter().any(|r| r.name() == name)
    }

    /// Number of active rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rule is active.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub(crate) fn as_slice(&self) -> &[Arc<dyn LintRule>] {
        &self.rules
    }
}

impl std::fmt::Debug for ActiveRuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
