//! Alphabetical ordering rules.
//!
//! Both rules report once per type, at the type's declaration, and include
//! the expected order in the message.

use crate::error::Result;
use crate::lint::{LintDiagnostic, LintRule};
use crate::schema::{Schema, TypeKind};

/// Returns the sorted names when `names` is out of order.
fn expected_order<'a>(names: impl Iterator<Item = &'a str>) -> Option<Vec<&'a str>> {
    let names: Vec<&str> = names.collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    (sorted != names).then_some(sorted)
}

/// Requires enum values to be sorted alphabetically.
pub struct EnumValuesSortedAlphabeticallyRule;

impl LintRule for EnumValuesSortedAlphabeticallyRule {
    fn name(&self) -> &str {
        "enum-values-sorted-alphabetically"
    }

    fn description(&self) -> &str {
        "Validates that enum values are sorted alphabetically"
    }

    fn check(&self, schema: &Schema) -> Result<Vec<LintDiagnostic>> {
        let mut diagnostics = Vec::new();

        for ty in schema.types.iter().filter(|t| t.kind == TypeKind::Enum) {
            let names = ty.enum_values.iter().map(|v| v.name.as_str());
            if let Some(sorted) = expected_order(names) {
                diagnostics.push(self.diagnostic(
                    format!(
                        "The enum `{}` should be sorted alphabetically. Expected sorting: {}",
                        ty.name,
                        sorted.join(", ")
                    ),
                    &ty.location,
                ));
            }
        }

        Ok(diagnostics)
    }
}

/// Requires object and interface fields to be sorted alphabetically.
pub struct TypeFieldsSortedAlphabeticallyRule;

impl LintRule for TypeFieldsSortedAlphabeticallyRule {
    fn name(&self) -> &str {
        "type-fields-sorted-alphabetically"
    }

    fn description(&self) -> &str {
        "Validates that object and interface fields are sorted alphabetically"
    }

    fn check(&self, schema: &Schema) -> Result<Vec<LintDiagnostic>> {
        let mut diagnostics = Vec::new();

        for ty in schema.types.iter().filter(|t| t.kind.has_fields()) {
            let names = ty.fields.iter().map(|f| f.name.as_str());
            if let Some(sorted) = expected_order(names) {
                diagnostics.push(self.diagnostic(
                    format!(
                        "The fields of {} `{}` should be sorted alphabetically. Expected sorting: {}",
                        ty.kind,
                        ty.name,
                        sorted.join(", ")
                    ),
                    &ty.location,
                ));
            }
        }

        Ok(diagnostics)
    }
}
