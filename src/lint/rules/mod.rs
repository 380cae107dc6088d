//! Built-in lint rules.
//!
//! This module contains all the built-in schema rules that come with gqlint.

pub mod defined_types_are_used;
pub mod deprecations_have_a_reason;
pub mod descriptions_are_capitalized;
pub mod fields_have_descriptions;
pub mod naming;
pub mod sorting;
pub mod types_have_descriptions;
pub mod value_descriptions;

use std::sync::Arc;

use super::LintRule;

pub use defined_types_are_used::DefinedTypesAreUsedRule;
pub use deprecations_have_a_reason::DeprecationsHaveAReasonRule;
pub use descriptions_are_capitalized::DescriptionsAreCapitalizedRule;
pub use fields_have_descriptions::{ArgumentsHaveDescriptionsRule, FieldsHaveDescriptionsRule};
pub use naming::{
    EnumValuesAllCapsRule, FieldsAreCamelCasedRule, InputObjectValuesAreCamelCasedRule,
    TypesAreCapitalizedRule,
};
pub use sorting::{EnumValuesSortedAlphabeticallyRule, TypeFieldsSortedAlphabeticallyRule};
pub use types_have_descriptions::TypesHaveDescriptionsRule;
pub use value_descriptions::{
    EnumValuesHaveDescriptionsRule, InputObjectValuesHaveDescriptionsRule,
};

/// Every built-in rule, in catalogue order.
pub fn builtin_rules() -> Vec<Arc<dyn LintRule>> {
    vec![
        Arc::new(TypesHaveDescriptionsRule),
        Arc::new(FieldsHaveDescriptionsRule),
        Arc::new(ArgumentsHaveDescriptionsRule),
        Arc::new(EnumValuesHaveDescriptionsRule),
        Arc::new(InputObjectValuesHaveDescriptionsRule),
        Arc::new(DescriptionsAreCapitalizedRule),
        Arc::new(DeprecationsHaveAReasonRule),
        Arc::new(TypesAreCapitalizedRule),
        Arc::new(FieldsAreCamelCasedRule),
        Arc::new(InputObjectValuesAreCamelCasedRule),
        Arc::new(EnumValuesAllCapsRule),
        Arc::new(EnumValuesSortedAlphabeticallyRule),
        Arc::new(TypeFieldsSortedAlphabeticallyRule),
        Arc::new(DefinedTypesAreUsedRule),
    ]
}

/// A description counts only if it has visible text.
pub(crate) fn has_description(description: &Option<String>) -> bool {
    description.as_deref().is_some_and(|d| !d.trim().is_empty())
}
