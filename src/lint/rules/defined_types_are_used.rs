//! Unused type detection.

use std::collections::HashSet;

use crate::error::Result;
use crate::lint::{LintDiagnostic, LintRule};
use crate::schema::{named_type, Schema};

/// Reports types that are neither referenced anywhere nor a root operation
/// type.
pub struct DefinedTypesAreUsedRule;

impl DefinedTypesAreUsedRule {
    fn referenced_names(schema: &Schema) -> HashSet<&str> {
        let mut used: HashSet<&str> = schema.root_type_names().into_iter().collect();

        for ty in &schema.types {
            used.extend(ty.interfaces.iter().map(String::as_str));
            used.extend(ty.members.iter().map(String::as_str));
            used.extend(ty.input_fields.iter().map(|v| named_type(&v.ty)));
            for field in &ty.fields {
                used.insert(named_type(&field.ty));
                used.extend(field.arguments.iter().map(|a| named_type(&a.ty)));
            }
        }

        for directive in &schema.directives {
            used.extend(directive.arguments.iter().map(|a| named_type(&a.ty)));
        }

        used
    }
}

impl LintRule for DefinedTypesAreUsedRule {
    fn name(&self) -> &str {
        "defined-types-are-used"
    }

    fn description(&self) -> &str {
        "Validates that every defined type is used somewhere in the schema"
    }

    fn check(&self, schema: &Schema) -> Result<Vec<LintDiagnostic>> {
        let used = Self::referenced_names(schema);

        Ok(schema
            .types
            .iter()
            .filter(|ty| !used.contains(ty.name.as_str()))
            .map(|ty| {
                self.diagnostic(
                    format!(
                        "The type `{}` is defined in the schema but not used anywhere.",
                        ty.name
                    ),
                    &ty.location,
                )
            })
            .collect())
    }
}
