//! Naming convention rules.
//!
//! GraphQL convention is `PascalCase` types, `camelCase` fields and
//! arguments, and `SCREAMING_CASE` enum values.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::lint::{LintDiagnostic, LintRule};
use crate::schema::{Schema, TypeKind};

macro_rules! lazy_regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($pattern).unwrap());
    };
}

lazy_regex!(RE_CAMEL_CASE, r"^_*[a-z][a-zA-Z0-9]*$");
lazy_regex!(RE_ALL_CAPS, r"^_*[A-Z][A-Z0-9_]*$");

fn is_camel_case(name: &str) -> bool {
    RE_CAMEL_CASE.is_match(name)
}

fn is_all_caps(name: &str) -> bool {
    RE_ALL_CAPS.is_match(name)
}

/// Requires object and interface type names to start with a capital letter.
pub struct TypesAreCapitalizedRule;

impl LintRule for TypesAreCapitalizedRule {
    fn name(&self) -> &str {
        "types-are-capitalized"
    }

    fn description(&self) -> &str {
        "Validates that object and interface type names are capitalized"
    }

    fn check(&self, schema: &Schema) -> Result<Vec<LintDiagnostic>> {
        Ok(schema
            .types
            .iter()
            .filter(|t| t.kind.has_fields())
            .filter(|t| !t.name.starts_with(|c: char| c.is_ascii_uppercase()))
            .map(|ty| {
                self.diagnostic(
                    format!(
                        "The {} `{}` should start with a capital letter.",
                        ty.kind, ty.name
                    ),
                    &ty.location,
                )
            })
            .collect())
    }
}

/// Requires object and interface field names to be camelCase.
pub struct FieldsAreCamelCasedRule;

impl LintRule for FieldsAreCamelCasedRule {
    fn name(&self) -> &str {
        "fields-are-camel-cased"
    }

    fn description(&self) -> &str {
        "Validates that object and interface field names are camelCase"
    }

    fn check(&self, schema: &Schema) -> Result<Vec<LintDiagnostic>> {
        let mut diagnostics = Vec::new();

        for ty in schema.types.iter().filter(|t| t.kind.has_fields()) {
            for field in ty.fields.iter().filter(|f| !is_camel_case(&f.name)) {
                diagnostics.push(self.diagnostic(
                    format!("The field `{}.{}` is not camel cased.", ty.name, field.name),
                    &field.location,
                ));
            }
        }

        Ok(diagnostics)
    }
}

/// Requires input object fields and field arguments to be camelCase.
pub struct InputObjectValuesAreCamelCasedRule;

impl LintRule for InputObjectValuesAreCamelCasedRule {
    fn name(&self) -> &str {
        "input-object-values-are-camel-cased"
    }

    fn description(&self) -> &str {
        "Validates that input object fields and arguments are camelCase"
    }

    fn check(&self, schema: &Schema) -> Result<Vec<LintDiagnostic>> {
        let mut diagnostics = Vec::new();

        for ty in &schema.types {
            if ty.kind == TypeKind::InputObject {
                for value in ty.input_fields.iter().filter(|v| !is_camel_case(&v.name)) {
                    diagnostics.push(self.diagnostic(
                        format!(
                            "The input value `{}.{}` is not camel cased.",
                            ty.name, value.name
                        ),
                        &value.location,
                    ));
                }
            }

            for field in &ty.fields {
                for arg in field.arguments.iter().filter(|a| !is_camel_case(&a.name)) {
                    diagnostics.push(self.diagnostic(
                        format!(
                            "The argument `{}` of `{}.{}` is not camel cased.",
                            arg.name, ty.name, field.name
                        ),
                        &arg.location,
                    ));
                }
            }
        }

        Ok(diagnostics)
    }
}

/// Requires enum values to be UPPER_CASE.
pub struct EnumValuesAllCapsRule;

impl LintRule for EnumValuesAllCapsRule {
    fn name(&self) -> &str {
        "enum-values-all-caps"
    }

    fn description(&self) -> &str {
        "Validates that enum values are all uppercase"
    }

    fn check(&self, schema: &Schema) -> Result<Vec<LintDiagnostic>> {
        let mut diagnostics = Vec::new();

        for ty in schema.types.iter().filter(|t| t.kind == TypeKind::Enum) {
            for value in ty.enum_values.iter().filter(|v| !is_all_caps(&v.name)) {
                diagnostics.push(self.diagnostic(
                    format!(
                        "The enum value `{}.{}` should be uppercase.",
                        ty.name, value.name
                    ),
                    &value.location,
                ));
            }
        }

        Ok(diagnostics)
    }
}
