//! Parsed GraphQL schema model.
//!
//! Rules never see SDL text or the parser's syntax tree. They receive a
//! [`Schema`]: a read-only tree of definitions where every node carries a
//! [`Location`] and its optional description.
//!
//! - [`location`] - Source positions and offset-to-line mapping
//! - [`source`] - Schema source files, path expansion, stdin
//! - [`parse`] - SDL to [`Schema`] conversion
//!
//! # Example
//!
//! ```
//! use gqlint::schema::{parse_sources, SourceFile};
//!
//! let source = SourceFile::new("schema.graphql", "type Query { hello: String }\n");
//! let schema = parse_sources(&[source]).unwrap();
//!
//! let query = schema.type_named("Query").unwrap();
//! assert_eq!(query.fields[0].name, "hello");
//! assert_eq!(query.location.line, 1);
//! ```

pub mod location;
pub mod parse;
pub mod source;

pub use location::{LineIndex, Location};
pub use parse::{parse_source, parse_sources};
pub use source::{expand_schema_paths, SourceFile};

use serde::{Deserialize, Serialize};

/// The kind of a named type definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Object,
    Interface,
    InputObject,
    Enum,
    Union,
    Scalar,
}

impl TypeKind {
    /// Human-readable kind used in diagnostic messages.
    pub fn label(&self) -> &'static str {
        match self {
            TypeKind::Object => "object type",
            TypeKind::Interface => "interface type",
            TypeKind::InputObject => "input object type",
            TypeKind::Enum => "enum type",
            TypeKind::Union => "union type",
            TypeKind::Scalar => "scalar type",
        }
    }

    /// Whether definitions of this kind declare output fields.
    pub fn has_fields(&self) -> bool {
        matches!(self, TypeKind::Object | TypeKind::Interface)
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A parsed type system definition.
///
/// `Schema` is shared read-only by every rule during a run, and is serialized
/// as JSON when sent to plugin processes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Named type definitions in source order.
    #[serde(default)]
    pub types: Vec<TypeDefinition>,
    /// Directive definitions in source order.
    #[serde(default)]
    pub directives: Vec<DirectiveDefinition>,
    /// Explicit `schema { ... }` definition, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_definition: Option<SchemaDefinition>,
}

impl Schema {
    /// Find a type definition by name.
    pub fn type_named(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.iter().find(|t| t.name == name)
    }

    /// Names of the root operation types.
    ///
    /// Uses the explicit schema definition when present, otherwise the
    /// conventional `Query`, `Mutation` and `Subscription` names.
    pub fn root_type_names(&self) -> Vec<&str> {
        match &self.schema_definition {
            Some(def) => def
                .root_operations
                .iter()
                .map(|op| op.type_name.as_str())
                .collect(),
            None => vec!["Query", "Mutation", "Subscription"],
        }
    }

    /// Append all definitions of `other`.
    pub fn merge(&mut self, other: Schema) {
        self.types.extend(other.types);
        self.directives.extend(other.directives);
        if self.schema_definition.is_none() {
            self.schema_definition = other.schema_definition;
        }
    }
}

/// A named type: object, interface, input object, enum, union or scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDefinition {
    pub kind: TypeKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub location: Location,
    /// Output fields (objects and interfaces).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDefinition>,
    /// Input fields (input objects).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input_fields: Vec<InputValueDefinition>,
    /// Values (enums).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<EnumValueDefinition>,
    /// Implemented interfaces (objects and interfaces).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<String>,
    /// Member types (unions).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
}

impl TypeDefinition {
    /// Create an empty definition of the given kind.
    pub fn new(kind: TypeKind, name: impl Into<String>, location: Location) -> Self {
        Self {
            kind,
            name: name.into(),
            description: None,
            location,
            fields: Vec::new(),
            input_fields: Vec::new(),
            enum_values: Vec::new(),
            interfaces: Vec::new(),
            members: Vec::new(),
            directives: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add an output field.
    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }
}

/// A field of an object or interface type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Type reference as written, e.g. `[User!]!`.
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<InputValueDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    pub location: Location,
}

impl FieldDefinition {
    /// Create a field with no description, arguments or directives.
    pub fn new(name: impl Into<String>, ty: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty: ty.into(),
            arguments: Vec::new(),
            directives: Vec::new(),
            location,
        }
    }

    /// Find a directive applied to this field.
    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directives.iter().find(|d| d.name == name)
    }
}

/// An argument or input object field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputValueDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    pub location: Location,
}

/// A value of an enum type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValueDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    pub location: Location,
}

impl EnumValueDefinition {
    /// Find a directive applied to this value.
    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directives.iter().find(|d| d.name == name)
    }
}

/// A directive usage such as `@deprecated(reason: "...")`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directive {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<DirectiveArgument>,
    pub location: Location,
}

impl Directive {
    /// Raw source text of an argument value.
    pub fn argument(&self, name: &str) -> Option<&str> {
        self.arguments
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }
}

/// One `name: value` pair of a directive usage. `value` is the literal as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectiveArgument {
    pub name: String,
    pub value: String,
}

/// A `directive @name(...) on ...` definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectiveDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<InputValueDefinition>,
    pub location: Location,
}

/// An explicit `schema { query: ... }` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDefinition {
    pub root_operations: Vec<RootOperation>,
    pub location: Location,
}

/// One `operation: Type` entry of a schema definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootOperation {
    /// `query`, `mutation` or `subscription`.
    pub operation: String,
    pub type_name: String,
}

/// Strip list and non-null wrappers from a type reference.
///
/// `[User!]!` becomes `User`.
pub fn named_type(ty: &str) -> &str {
    ty.trim_matches(|c: char| c == '[' || c == ']' || c == '!' || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_type_strips_wrappers() {
        assert_eq!(named_type("String"), "String");
        assert_eq!(named_type("String!"), "String");
        assert_eq!(named_type("[User!]!"), "User");
        assert_eq!(named_type("[[Int]]"), "Int");
    }

    #[test]
    fn root_type_names_defaults() {
        let schema = Schema::default();
        assert_eq!(
            schema.root_type_names(),
            vec!["Query", "Mutation", "Subscription"]
        );
    }

    #[test]
    fn root_type_names_from_schema_definition() {
        let schema = Schema {
            schema_definition: Some(SchemaDefinition {
                root_operations: vec![RootOperation {
                    operation: "query".into(),
                    type_name: "QueryRoot".into(),
                }],
                location: Location::new("s.graphql", 1, 1),
            }),
            ..Default::default()
        };
        assert_eq!(schema.root_type_names(), vec!["QueryRoot"]);
    }

    #[test]
    fn merge_appends_definitions() {
        let mut a = Schema {
            types: vec![TypeDefinition::new(
                TypeKind::Object,
                "A",
                Location::new("a.graphql", 1, 1),
            )],
            ..Default::default()
        };
        let b = Schema {
            types: vec![TypeDefinition::new(
                TypeKind::Scalar,
                "B",
                Location::new("b.graphql", 1, 1),
            )],
            ..Default::default()
        };

        a.merge(b);

        assert_eq!(a.types.len(), 2);
        assert!(a.type_named("B").is_some());
    }

    #[test]
    fn schema_serializes_type_field_as_type() {
        let field = FieldDefinition::new("a", "String", Location::new("s.graphql", 2, 3));
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(value["type"], "String");
        assert!(value.get("description").is_none());
    }

    #[test]
    fn type_kind_labels() {
        assert_eq!(TypeKind::Object.to_string(), "object type");
        assert_eq!(TypeKind::InputObject.to_string(), "input object type");
        assert!(TypeKind::Interface.has_fields());
        assert!(!TypeKind::Enum.has_fields());
    }
}
