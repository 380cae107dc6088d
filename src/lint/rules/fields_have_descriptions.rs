//! Field and argument description validation.

use super::has_description;
use crate::error::Result;
use crate::lint::{LintDiagnostic, LintRule};
use crate::schema::Schema;

/// Requires a description on every object and interface field.
pub struct FieldsHaveDescriptionsRule;

impl LintRule for FieldsHaveDescriptionsRule {
    fn name(&self) -> &str {
        "fields-have-descriptions"
    }

    fn description(&self) -> &str {
        "Validates that every object and interface field has a description"
    }

    fn check(&self, schema: &Schema) -> Result<Vec<LintDiagnostic>> {
        let mut diagnostics = Vec::new();

        for ty in schema.types.iter().filter(|t| t.kind.has_fields()) {
            for field in &ty.fields {
                if !has_description(&field.description) {
                    diagnostics.push(self.diagnostic(
                        format!(
                            "The field `{}.{}` is missing a description.",
                            ty.name, field.name
                        ),
                        &field.location,
                    ));
                }
            }
        }

        Ok(diagnostics)
    }
}

/// Requires a description on every field argument.
pub struct ArgumentsHaveDescriptionsRule;

impl LintRule for ArgumentsHaveDescriptionsRule {
    fn name(&self) -> &str {
        "arguments-have-descriptions"
    }

    fn description(&self) -> &str {
        "Validates that every field argument has a description"
    }

    fn check(&self, schema: &Schema) -> Result<Vec<LintDiagnostic>> {
        let mut diagnostics = Vec::new();

        for ty in schema.types.iter().filter(|t| t.kind.has_fields()) {
            for field in &ty.fields {
                for arg in &field.arguments {
                    if !has_description(&arg.description) {
                        diagnostics.push(self.diagnostic(
                            format!(
                                "The `{}` argument of `{}.{}` is missing a description.",
                                arg.name, ty.name, field.name
                            ),
                            &arg.location,
                        ));
                    }
                }
            }
        }

        Ok(diagnostics)
    }
}
