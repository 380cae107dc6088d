//! Enum value and input value description validation.

use super::has_description;
use crate::error::Result;
use crate::lint::{LintDiagnostic, LintRule};
use crate::schema::{Schema, TypeKind};

/// Requires a description on every enum value.
pub struct EnumValuesHaveDescriptionsRule;

impl LintRule for EnumValuesHaveDescriptionsRule {
    fn name(&self) -> &str {
        "enum-values-have-descriptions"
    }

    fn description(&self) -> &str {
        "Validates that every enum value has a description"
    }

    fn check(&self, schema: &Schema) -> Result<Vec<LintDiagnostic>> {
        Ok(schema
            .types
            .iter()
            .filter(|t| t.kind == TypeKind::Enum)
            .flat_map(|ty| {
                ty.enum_values
                    .iter()
                    .filter(|v| !has_description(&v.description))
                    .map(move |value| {
                        self.diagnostic(
                            format!(
                                "The enum value `{}.{}` is missing a description.",
                                ty.name, value.name
                            ),
                            &value.location,
                        )
                    })
            })
            .collect())
    }
}

/// Requires a description on every input object field.
pub struct InputObjectValuesHaveDescriptionsRule;

impl LintRule for InputObjectValuesHaveDescriptionsRule {
    fn name(&self) -> &str {
        "input-object-values-have-descriptions"
    }

    fn description(&self) -> &str {
        "Validates that every input object field has a description"
    }

    fn check(&self, schema: &Schema) -> Result<Vec<LintDiagnostic>> {
        Ok(schema
            .types
            .iter()
            .filter(|t| t.kind == TypeKind::InputObject)
            .flat_map(|ty| {
                ty.input_fields
                    .iter()
                    .filter(|v| !has_description(&v.description))
                    .map(move |value| {
                        self.diagnostic(
                            format!(
                                "The input value `{}.{}` is missing a description.",
                                ty.name, value.name
                            ),
                            &value.location,
                        )
                    })
            })
            .collect())
    }
}
