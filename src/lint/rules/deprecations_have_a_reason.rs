//! Deprecation reason validation.

use crate::error::Result;
use crate::lint::{LintDiagnostic, LintRule};
use crate::schema::{Directive, Schema, TypeKind};

/// Requires every `@deprecated` usage to carry a non-empty `reason`.
pub struct DeprecationsHaveAReasonRule;

impl LintRule for DeprecationsHaveAReasonRule {
    fn name(&self) -> &str {
        "deprecations-have-a-reason"
    }

    fn description(&self) -> &str {
        "Validates that @deprecated fields and enum values give a reason"
    }

    fn check(&self, schema: &Schema) -> Result<Vec<LintDiagnostic>> {
        let mut diagnostics = Vec::new();

        for ty in &schema.types {
            if ty.kind.has_fields() {
                for field in &ty.fields {
                    if field.directive("deprecated").is_some_and(missing_reason) {
                        diagnostics.push(self.diagnostic(
                            format!(
                                "The field `{}.{}` is deprecated but has no deprecation reason.",
                                ty.name, field.name
                            ),
                            &field.location,
                        ));
                    }
                }
            }

            if ty.kind == TypeKind::Enum {
                for value in &ty.enum_values {
                    if value.directive("deprecated").is_some_and(missing_reason) {
                        diagnostics.push(self.diagnostic(
                            format!(
                                "The enum value `{}.{}` is deprecated but has no deprecation reason.",
                                ty.name, value.name
                            ),
                            &value.location,
                        ));
                    }
                }
            }
        }

        Ok(diagnostics)
    }
}

fn missing_reason(directive: &Directive) -> bool {
    match directive.argument("reason") {
        None => true,
        Some(raw) => raw.trim_matches('"').trim().is_empty(),
    }
}
