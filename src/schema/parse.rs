//! SDL to [`Schema`] conversion.
//!
//! Parsing is delegated to `apollo-parser`; this module only walks its
//! concrete syntax tree and records names, descriptions, type references
//! and positions. Executable definitions and type extensions are skipped.

use apollo_parser::cst::{self, CstNode};
use apollo_parser::Parser;

use super::location::{LineIndex, Location};
use super::source::SourceFile;
use super::{
    Directive, DirectiveArgument, DirectiveDefinition, EnumValueDefinition, FieldDefinition,
    InputValueDefinition, RootOperation, Schema, SchemaDefinition, TypeDefinition, TypeKind,
};
use crate::error::{GqlintError, Result};

/// Parse every source and merge the results into one schema.
pub fn parse_sources(sources: &[SourceFile]) -> Result<Schema> {
    let mut schema = Schema::default();
    for source in sources {
        schema.merge(parse_source(source)?);
    }
    tracing::debug!(
        "Parsed {} type(s) from {} source(s)",
        schema.types.len(),
        sources.len()
    );
    Ok(schema)
}

/// Parse a single source file.
///
/// Any syntax error fails the whole file.
pub fn parse_source(source: &SourceFile) -> Result<Schema> {
    let tree = Parser::new(&source.text).parse();
    let converter = Converter::new(source);

    if let Some(error) = tree.errors().next() {
        let location = converter.location_at(error.index());
        return Err(GqlintError::SchemaParseError {
            file: source.path.clone(),
            message: format!("{}:{}: {}", location.line, location.column, error.message()),
        });
    }

    let mut schema = Schema::default();
    for definition in tree.document().definitions() {
        match definition {
            cst::Definition::ObjectTypeDefinition(def) => {
                let mut ty = converter.named_type_definition(
                    TypeKind::Object,
                    &def,
                    def.name(),
                    def.description(),
                );
                ty.interfaces = converter.implements(def.implements_interfaces());
                ty.directives = converter.directives(def.directives());
                ty.fields = converter.fields(def.fields_definition());
                schema.types.push(ty);
            }
            cst::Definition::InterfaceTypeDefinition(def) => {
                let mut ty = converter.named_type_definition(
                    TypeKind::Interface,
                    &def,
                    def.name(),
                    def.description(),
                );
                ty.interfaces = converter.implements(def.implements_interfaces());
                ty.directives = converter.directives(def.directives());
                ty.fields = converter.fields(def.fields_definition());
                schema.types.push(ty);
            }
            cst::Definition::InputObjectTypeDefinition(def) => {
                let mut ty = converter.named_type_definition(
                    TypeKind::InputObject,
                    &def,
                    def.name(),
                    def.description(),
                );
                ty.directives = converter.directives(def.directives());
                ty.input_fields = def
                    .input_fields_definition()
                    .map(|f| converter.input_values(f.input_value_definitions()))
                    .unwrap_or_default();
                schema.types.push(ty);
            }
            cst::Definition::EnumTypeDefinition(def) => {
                let mut ty = converter.named_type_definition(
                    TypeKind::Enum,
                    &def,
                    def.name(),
                    def.description(),
                );
                ty.directives = converter.directives(def.directives());
                ty.enum_values = def
                    .enum_values_definition()
                    .map(|values| {
                        values
                            .enum_value_definitions()
                            .map(|value| converter.enum_value(&value))
                            .collect()
                    })
                    .unwrap_or_default();
                schema.types.push(ty);
            }
            cst::Definition::UnionTypeDefinition(def) => {
                let mut ty = converter.named_type_definition(
                    TypeKind::Union,
                    &def,
                    def.name(),
                    def.description(),
                );
                ty.directives = converter.directives(def.directives());
                ty.members = def
                    .union_member_types()
                    .map(|m| m.named_types().map(|t| named_type_text(&t)).collect())
                    .unwrap_or_default();
                schema.types.push(ty);
            }
            cst::Definition::ScalarTypeDefinition(def) => {
                let mut ty = converter.named_type_definition(
                    TypeKind::Scalar,
                    &def,
                    def.name(),
                    def.description(),
                );
                ty.directives = converter.directives(def.directives());
                schema.types.push(ty);
            }
            cst::Definition::DirectiveDefinition(def) => {
                schema.directives.push(DirectiveDefinition {
                    name: name_text(def.name()),
                    description: def.description().as_ref().map(description_text),
                    arguments: def
                        .arguments_definition()
                        .map(|a| converter.input_values(a.input_value_definitions()))
                        .unwrap_or_default(),
                    location: converter.declaration(&def, def.description().as_ref()),
                });
            }
            cst::Definition::SchemaDefinition(def) => {
                let root_operations = def
                    .root_operation_type_definitions()
                    .filter_map(|op| {
                        let operation = op.operation_type()?.syntax().text().to_string();
                        let type_name = named_type_text(&op.named_type()?);
                        Some(RootOperation {
                            operation: operation.trim().to_string(),
                            type_name,
                        })
                    })
                    .collect();
                schema.schema_definition = Some(SchemaDefinition {
                    root_operations,
                    location: converter.declaration(&def, None),
                });
            }
            _ => {}
        }
    }

    Ok(schema)
}

/// Walks CST nodes of one file and produces located schema nodes.
struct Converter<'a> {
    file: &'a str,
    text: &'a str,
    index: LineIndex,
}

impl<'a> Converter<'a> {
    fn new(source: &'a SourceFile) -> Self {
        Self {
            file: &source.path,
            text: &source.text,
            index: LineIndex::new(&source.text),
        }
    }

    fn location_at(&self, offset: usize) -> Location {
        let (line, column) = self.index.line_col(self.text, offset);
        Location::new(self.file, line, column)
    }

    /// Position of a declaration, after its description and any comments.
    fn declaration<N: CstNode>(&self, node: &N, description: Option<&cst::Description>) -> Location {
        let start = match description {
            Some(desc) => usize::from(desc.syntax().text_range().end()),
            None => usize::from(node.syntax().text_range().start()),
        };
        self.location_at(skip_trivia(self.text, start))
    }

    fn named_type_definition<N: CstNode>(
        &self,
        kind: TypeKind,
        node: &N,
        name: Option<cst::Name>,
        description: Option<cst::Description>,
    ) -> TypeDefinition {
        let mut ty = TypeDefinition::new(
            kind,
            name_text(name),
            self.declaration(node, description.as_ref()),
        );
        ty.description = description.as_ref().map(description_text);
        ty
    }

    fn fields(&self, fields: Option<cst::FieldsDefinition>) -> Vec<FieldDefinition> {
        let Some(fields) = fields else {
            return Vec::new();
        };
        fields
            .field_definitions()
            .map(|field| {
                let description = field.description();
                FieldDefinition {
                    name: name_text(field.name()),
                    description: description.as_ref().map(description_text),
                    ty: type_text(field.ty()),
                    arguments: field
                        .arguments_definition()
                        .map(|a| self.input_values(a.input_value_definitions()))
                        .unwrap_or_default(),
                    directives: self.directives(field.directives()),
                    location: self.declaration(&field, description.as_ref()),
                }
            })
            .collect()
    }

    fn input_values(
        &self,
        values: impl Iterator<Item = cst::InputValueDefinition>,
    ) -> Vec<InputValueDefinition> {
        values
            .map(|value| {
                let description = value.description();
                InputValueDefinition {
                    name: name_text(value.name()),
                    description: description.as_ref().map(description_text),
                    ty: type_text(value.ty()),
                    default_value: value
                        .default_value()
                        .and_then(|d| d.value())
                        .map(|v| v.syntax().text().to_string().trim().to_string()),
                    directives: self.directives(value.directives()),
                    location: self.declaration(&value, description.as_ref()),
                }
            })
            .collect()
    }

    fn enum_value(&self, value: &cst::EnumValueDefinition) -> EnumValueDefinition {
        let description = value.description();
        EnumValueDefinition {
            name: value
                .enum_value()
                .map(|v| name_text(v.name()))
                .unwrap_or_default(),
            description: description.as_ref().map(description_text),
            directives: self.directives(value.directives()),
            location: self.declaration(value, description.as_ref()),
        }
    }

    fn directives(&self, directives: Option<cst::Directives>) -> Vec<Directive> {
        let Some(directives) = directives else {
            return Vec::new();
        };
        directives
            .directives()
            .map(|directive| Directive {
                name: name_text(directive.name()),
                arguments: directive
                    .arguments()
                    .map(|args| {
                        args.arguments()
                            .map(|arg| DirectiveArgument {
                                name: name_text(arg.name()),
                                value: arg
                                    .value()
                                    .map(|v| v.syntax().text().to_string().trim().to_string())
                                    .unwrap_or_default(),
                            })
                            .collect()
                    })
                    .unwrap_or_default(),
                location: self.location_at(usize::from(directive.syntax().text_range().start())),
            })
            .collect()
    }

    fn implements(&self, interfaces: Option<cst::ImplementsInterfaces>) -> Vec<String> {
        interfaces
            .map(|i| i.named_types().map(|t| named_type_text(&t)).collect())
            .unwrap_or_default()
    }
}

fn name_text(name: Option<cst::Name>) -> String {
    name.map(|n| n.text().to_string()).unwrap_or_default()
}

fn named_type_text(ty: &cst::NamedType) -> String {
    name_text(ty.name())
}

fn type_text(ty: Option<cst::Type>) -> String {
    ty.map(|t| t.syntax().text().to_string().trim().to_string())
        .unwrap_or_default()
}

/// Description contents without quotes.
fn description_text(description: &cst::Description) -> String {
    let raw = description.syntax().text().to_string();
    unquote(raw.trim())
}

/// Strip GraphQL string quotes and compute the string value.
fn unquote(raw: &str) -> String {
    if let Some(block) = raw
        .strip_prefix("\"\"\"")
        .and_then(|s| s.strip_suffix("\"\"\""))
    {
        return block_string_value(&block.replace("\\\"\"\"", "\"\"\""));
    }

    let inner = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw);

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('u') => match unicode_escape(&mut chars) {
                Some(decoded) => out.push(decoded),
                None => out.push_str("\\u"),
            },
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Decode the code point after `\u`, either `XXXX` (with surrogate pairs) or
/// `{X...}`. On malformed input nothing is consumed.
fn unicode_escape(chars: &mut std::str::Chars<'_>) -> Option<char> {
    let rest = chars.as_str();

    if let Some(braced) = rest.strip_prefix('{') {
        let close = braced.find('}')?;
        let decoded = u32::from_str_radix(&braced[..close], 16)
            .ok()
            .and_then(char::from_u32)?;
        *chars = braced[close + 1..].chars();
        return Some(decoded);
    }

    let unit = hex4(rest)?;
    let mut after = &rest[4..];
    let decoded = match unit {
        0xD800..=0xDBFF => {
            let low = after.strip_prefix("\\u").and_then(hex4);
            match low {
                Some(low @ 0xDC00..=0xDFFF) => {
                    after = &after[6..];
                    char::from_u32(0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00))
                }
                _ => None,
            }
        }
        _ => char::from_u32(unit),
    }
    .unwrap_or(char::REPLACEMENT_CHARACTER);

    *chars = after.chars();
    Some(decoded)
}

fn hex4(text: &str) -> Option<u32> {
    let digits = text.get(..4)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Block string value: common indentation removed from every line but the
/// first, and leading and trailing blank lines dropped.
fn block_string_value(raw: &str) -> String {
    let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();

    let indent_of = |line: &str| line.len() - line.trim_start_matches([' ', '\t']).len();
    let common = lines
        .iter()
        .skip(1)
        .filter(|line| !is_blank(line))
        .map(|line| indent_of(line))
        .min()
        .unwrap_or(0);

    let dedented: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                *line
            } else {
                line.get(common..).unwrap_or("")
            }
        })
        .collect();

    let first = dedented.iter().position(|line| !is_blank(line));
    let last = dedented.iter().rposition(|line| !is_blank(line));
    match (first, last) {
        (Some(first), Some(last)) => dedented[first..=last].join("\n"),
        _ => String::new(),
    }
}

fn is_blank(line: &str) -> bool {
    line.chars().all(|c| c == ' ' || c == '\t')
}

/// Skip whitespace, commas and `#` comments starting at `offset`.
fn skip_trivia(text: &str, mut offset: usize) -> usize {
    let bytes = text.as_bytes();
    while offset < bytes.len() {
        match bytes[offset] {
            b' ' | b'\t' | b'\r' | b'\n' | b',' => offset += 1,
            b'#' => {
                while offset < bytes.len() && bytes[offset] != b'\n' {
                    offset += 1;
                }
            }
            _ => break,
        }
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Schema {
        parse_source(&SourceFile::new("schema.graphql", text)).unwrap()
    }

    #[test]
    fn parses_object_type_positions() {
        let schema = parse("\n\n\n\ntype QueryRoot {\n  a: String\n}\n");

        let ty = schema.type_named("QueryRoot").unwrap();
        assert_eq!(ty.kind, TypeKind::Object);
        assert_eq!(ty.location, Location::new("schema.graphql", 5, 1));
        assert_eq!(ty.fields[0].name, "a");
        assert_eq!(ty.fields[0].ty, "String");
        assert_eq!(ty.fields[0].location, Location::new("schema.graphql", 6, 3));
        assert!(ty.description.is_none());
    }

    #[test]
    fn declaration_position_skips_description() {
        let schema = parse("\"A user\"\ntype User {\n  \"The id\"\n  id: ID!\n}\n");

        let ty = schema.type_named("User").unwrap();
        assert_eq!(ty.description.as_deref(), Some("A user"));
        assert_eq!(ty.location.line, 2);
        assert_eq!(ty.fields[0].description.as_deref(), Some("The id"));
        assert_eq!(ty.fields[0].location.line, 4);
        assert_eq!(ty.fields[0].location.column, 3);
    }

    #[test]
    fn parses_block_descriptions() {
        let schema = parse("\"\"\"\n  Block text\n\"\"\"\nscalar Date\n");

        let ty = schema.type_named("Date").unwrap();
        assert_eq!(ty.description.as_deref(), Some("Block text"));
        assert_eq!(ty.location.line, 4);
    }

    #[test]
    fn parses_enum_values_and_directives() {
        let schema = parse(
            "enum Color {\n  RED\n  green @deprecated(reason: \"use GREEN\")\n}\n",
        );

        let ty = schema.type_named("Color").unwrap();
        assert_eq!(ty.kind, TypeKind::Enum);
        assert_eq!(ty.enum_values.len(), 2);
        assert_eq!(ty.enum_values[1].name, "green");
        let deprecated = ty.enum_values[1].directive("deprecated").unwrap();
        assert_eq!(deprecated.argument("reason"), Some("\"use GREEN\""));
    }

    #[test]
    fn parses_arguments_and_input_objects() {
        let schema = parse(
            "type Query {\n  user(id: ID!, first: Int = 10): User\n}\ninput UserInput {\n  name: String!\n}\n",
        );

        let field = &schema.type_named("Query").unwrap().fields[0];
        assert_eq!(field.arguments.len(), 2);
        assert_eq!(field.arguments[0].ty, "ID!");
        assert_eq!(field.arguments[1].default_value.as_deref(), Some("10"));

        let input = schema.type_named("UserInput").unwrap();
        assert_eq!(input.kind, TypeKind::InputObject);
        assert_eq!(input.input_fields[0].name, "name");
    }

    #[test]
    fn parses_unions_interfaces_and_schema_definition() {
        let schema = parse(
            "schema { query: Root }\ninterface Node { id: ID! }\ntype A implements Node { id: ID! }\nunion Search = A | B\n",
        );

        assert_eq!(schema.root_type_names(), vec!["Root"]);
        assert_eq!(schema.type_named("A").unwrap().interfaces, vec!["Node"]);
        assert_eq!(schema.type_named("Search").unwrap().members, vec!["A", "B"]);
        assert_eq!(
            schema.type_named("Node").unwrap().kind,
            TypeKind::Interface
        );
    }

    #[test]
    fn syntax_error_reports_file() {
        let err = parse_source(&SourceFile::new("bad.graphql", "type {")).unwrap_err();
        match err {
            GqlintError::SchemaParseError { file, .. } => assert_eq!(file, "bad.graphql"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unquote_resolves_escapes() {
        assert_eq!(unquote("\"say \\\"hi\\\"\""), "say \"hi\"");
        assert_eq!(unquote("\"\"\"block\"\"\""), "block");
        assert_eq!(unquote("\"tab\\tline\\/end\""), "tab\tline/end");
    }

    #[test]
    fn unquote_decodes_unicode_escapes() {
        assert_eq!(unquote("\"\\u0054he answer\""), "The answer");
        assert_eq!(unquote("\"\\u{1F600}\""), "\u{1F600}");
        assert_eq!(unquote("\"\\uD83D\\uDE00\""), "\u{1F600}");
        assert_eq!(unquote("\"\\uD83D!\""), "\u{FFFD}!");
    }

    #[test]
    fn block_strings_drop_common_indentation() {
        let raw = "\"\"\"\n    First line\n      indented\n    last\n\n  \"\"\"";

        assert_eq!(unquote(raw), "First line\n  indented\nlast");
    }

    #[test]
    fn escaped_description_reaches_rules() {
        let schema = parse("type Query {\n  \"\\u0054he answer\"\n  answer: Int\n}\n");

        let field = &schema.type_named("Query").unwrap().fields[0];
        assert_eq!(field.description.as_deref(), Some("The answer"));
    }

    #[test]
    fn skip_trivia_skips_comments() {
        let text = "  # note\n  type";
        assert_eq!(skip_trivia(text, 0), 11);
    }
}
