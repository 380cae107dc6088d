//! Description capitalization.
//!
//! Field descriptions should read as sentences.

use crate::error::Result;
use crate::lint::{LintDiagnostic, LintRule};
use crate::schema::Schema;

/// Requires field descriptions to start with an uppercase letter.
pub struct DescriptionsAreCapitalizedRule;

impl LintRule for DescriptionsAreCapitalizedRule {
    fn name(&self) -> &str {
        "descriptions-are-capitalized"
    }

    fn description(&self) -> &str {
        "Validates that field descriptions start with a capital letter"
    }

    fn check(&self, schema: &Schema) -> Result<Vec<LintDiagnostic>> {
        let mut diagnostics = Vec::new();

        for ty in schema.types.iter().filter(|t| t.kind.has_fields()) {
            for field in &ty.fields {
                let Some(description) = field.description.as_deref() else {
                    continue;
                };
                let first = description.trim_start().chars().next();
                if first.is_some_and(char::is_lowercase) {
                    diagnostics.push(self.diagnostic(
                        format!(
                            "The description for field `{}.{}` should be capitalized.",
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{parse_source, SourceFile};

    #[test]
    fn reports_lowercase_descriptions() {
        let schema = parse_source(&SourceFile::new(
            "schema.graphql",
            "type Query {\n  \"the answer\"\n  a: Int\n  \"The question\"\n  b: String\n  \"42 is fine\"\n  c: Int\n  d: Int\n}\n",
        ))
        .unwrap();

        let diagnostics = DescriptionsAreCapitalizedRule.check(&schema).unwrap();

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "The description for field `Query.a` should be capitalized."
        );
    }
}
