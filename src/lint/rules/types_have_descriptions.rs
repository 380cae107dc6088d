//! Type description validation.
//!
//! Every named type definition should explain what it represents.

use super::has_description;
use crate::error::Result;
use crate::lint::{LintDiagnostic, LintRule};
use crate::schema::Schema;

/// Requires a description on every type definition.
pub struct TypesHaveDescriptionsRule;

impl LintRule for TypesHaveDescriptionsRule {
    fn name(&self) -> &str {
        "types-have-descriptions"
    }

    fn description(&self) -> &str {
        "Validates that every type definition has a description"
    }

    fn check(&self, schema: &Schema) -> Result<Vec<LintDiagnostic>> {
        Ok(schema
            .types
            .iter()
            .filter(|ty| !has_description(&ty.description))
            .map(|ty| {
                self.diagnostic(
                    format!("The {} `{}` is missing a description.", ty.kind, ty.name),
                    &ty.location,
                )
            })
            .collect())
    }
}
