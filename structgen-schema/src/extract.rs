//! Struct field extraction.
//!
//! Field types are copied out of the declaration file by byte range and only
//! their whitespace is normalized. Nothing is printed back from the syntax
//! tree, so tuple, array and generic syntax survives exactly as the
//! declaration generator wrote it.

use crate::error::SchemaError;
use crate::locator::StructMethod;
use crate::parser::SourceDocument;
use crate::types::{FieldSpec, SchemaOptions, Span};
use tree_sitter::Node;

/// Decomposed parameter type literal of a struct method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructShape {
    /// Range of the type literal, braces included.
    pub literal: Span,
    /// Offsets of the literal's own comma separators.
    pub separators: Vec<usize>,
    /// End of the last member when no separator follows it.
    pub unterminated: Option<usize>,
    /// Fields in declaration order, discriminant excluded.
    pub fields: Vec<FieldSpec>,
    /// Whether the literal declares the discriminant property.
    pub has_discriminant: bool,
}

impl StructShape {
    /// Returns the literal's text with its top-level comma separators
    /// rewritten to semicolons, as required inside a class body.
    ///
    /// The last member is terminated right after its own text, ahead of
    /// any trailing comment. Nested type literals keep their original
    /// separators.
    #[must_use]
    pub fn class_body(&self, text: &str) -> String {
        let mut body = String::with_capacity(self.literal.len() + 1);
        let mut cursor = self.literal.start;
        for &separator in &self.separators {
            body.push_str(&text[cursor..separator]);
            body.push(';');
            cursor = separator + 1;
        }
        if let Some(end) = self.unterminated {
            body.push_str(&text[cursor..end]);
            body.push(';');
            cursor = end;
        }
        body.push_str(&text[cursor..self.literal.end]);
        body
    }
}

/// Extracts the field list of a struct method's first parameter.
///
/// # Errors
/// Returns `SchemaError::ExpectedInlineStruct` if the first parameter is
/// missing or not an inline type literal, and `SchemaError::UnsupportedMember`
/// if the literal contains members that cannot become class fields.
pub fn extract_struct(
    document: &SourceDocument,
    method: &StructMethod<'_>,
    options: &SchemaOptions,
) -> Result<StructShape, SchemaError> {
    let literal = struct_literal(document, method)?;

    let mut shape = StructShape {
        literal: Span::of(&literal),
        separators: Vec::new(),
        unterminated: None,
        fields: Vec::new(),
        has_discriminant: false,
    };

    let mut cursor = literal.walk();
    for member in literal.children(&mut cursor) {
        match member.kind() {
            "property_signature" => {
                shape.unterminated = Some(member.end_byte());
                let field = extract_field(document, method, &member)?;
                if field.name == options.discriminant {
                    if !holds_kind(&field.type_text, &method.kind) {
                        return Err(SchemaError::unsupported(
                            &method.name,
                            format!("discriminant `{}: {}`", field.name, field.type_text),
                        ));
                    }
                    shape.has_discriminant = true;
                    continue;
                }
                tracing::debug!("{}: field {}: {}", method.kind, field.name, field.type_text);
                shape.fields.push(field);
            }
            "," => {
                shape.separators.push(member.start_byte());
                shape.unterminated = None;
            }
            ";" => shape.unterminated = None,
            "{" | "}" => {}
            _ if member.is_extra() => {}
            other => return Err(SchemaError::unsupported(&method.name, format!("`{other}`"))),
        }
    }

    Ok(shape)
}

/// Resolves the inline type literal of the method's first parameter.
fn struct_literal<'a>(
    document: &'a SourceDocument,
    method: &StructMethod<'a>,
) -> Result<Node<'a>, SchemaError> {
    let parameters = method
        .node
        .child_by_field_name("parameters")
        .ok_or_else(|| SchemaError::expected_struct(&method.name, "no parameter list"))?;
    let parameter = first_named(&parameters)
        .filter(|p| matches!(p.kind(), "required_parameter" | "optional_parameter"))
        .ok_or_else(|| SchemaError::expected_struct(&method.name, "no parameters"))?;
    let annotation = parameter
        .child_by_field_name("type")
        .ok_or_else(|| SchemaError::expected_struct(&method.name, "an untyped parameter"))?;
    let ty = first_named(&annotation)
        .map(unwrap_parenthesized)
        .ok_or_else(|| SchemaError::expected_struct(&method.name, "an empty annotation"))?;

    let opens_with_brace = ty.child(0).is_some_and(|open| open.kind() == "{");
    if ty.kind() != "object_type" || !opens_with_brace {
        let found = normalize_type_text(document.node_text(&ty));
        return Err(SchemaError::expected_struct(&method.name, format!("`{found}`")));
    }

    Ok(ty)
}

fn extract_field(
    document: &SourceDocument,
    method: &StructMethod<'_>,
    property: &Node<'_>,
) -> Result<FieldSpec, SchemaError> {
    let name = property
        .child_by_field_name("name")
        .ok_or_else(|| SchemaError::unsupported(&method.name, "unnamed property"))?;
    if name.kind() != "property_identifier" {
        return Err(SchemaError::unsupported(
            &method.name,
            format!("property {}", document.node_text(&name)),
        ));
    }

    let type_text = property
        .child_by_field_name("type")
        .and_then(|annotation| first_named(&annotation))
        .map(unwrap_parenthesized)
        .map(|ty| normalize_type_text(document.node_text(&ty)))
        .unwrap_or_else(|| "any".to_string());

    let mut cursor = property.walk();
    let optional = property
        .children(&mut cursor)
        .any(|child| !child.is_named() && child.kind() == "?");

    Ok(FieldSpec::new(document.node_text(&name), type_text).optional(optional))
}

/// Whether a discriminant of this type accepts the kind name as a string.
fn holds_kind(type_text: &str, kind: &str) -> bool {
    match type_text {
        "string" | "any" => true,
        quoted => ['"', '\''].iter().any(|&quote| {
            quoted
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
                .is_some_and(|inner| inner == kind)
        }),
    }
}

fn first_named<'a>(node: &Node<'a>) -> Option<Node<'a>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).find(|child| !child.is_extra())
}

/// Replaces a parenthesized type by the type it encloses.
fn unwrap_parenthesized(mut node: Node<'_>) -> Node<'_> {
    while node.kind() == "parenthesized_type" {
        match first_named(&node) {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}

/// Collapses whitespace runs in a type expression to single spaces.
///
/// Comments count as whitespace. String and template literal types are
/// copied unchanged.
#[must_use]
pub fn normalize_type_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            c if c.is_whitespace() => pending_space = true,
            '/' if chars.peek() == Some(&'/') => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
                pending_space = true;
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
                pending_space = true;
            }
            '"' | '\'' | '`' => {
                flush_space(&mut out, &mut pending_space);
                out.push(ch);
                let mut escaped = false;
                for c in chars.by_ref() {
                    out.push(c);
                    if escaped {
                        escaped = false;
                    } else if c == '\\' {
                        escaped = true;
                    } else if c == ch {
                        break;
                    }
                }
            }
            _ => {
                flush_space(&mut out, &mut pending_space);
                out.push(ch);
            }
        }
    }

    out
}

fn flush_space(out: &mut String, pending: &mut bool) {
    if *pending && !out.is_empty() {
        out.push(' ');
    }
    *pending = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::{locate_interface, locate_struct_methods};

    fn shapes(source: &str) -> Result<Vec<StructShape>, SchemaError> {
        let document = SourceDocument::parse(source).expect("Failed to parse");
        let interface = locate_interface(&document)?;
        let options = SchemaOptions::default();
        locate_struct_methods(&document, &interface, &options)
            .iter()
            .map(|method| extract_struct(&document, method, &options))
            .collect()
    }

    fn field_names(shape: &StructShape) -> Vec<&str> {
        shape.fields.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_discriminant_excluded_in_any_position() {
        let source = r#"
export declare class MyWord {
  GuessStruct(arg0: { p1: string; p2: number; kind: string; p3: boolean }): Promise<void>;
}
"#;
        let shapes = shapes(source).expect("Failed to extract");
        assert_eq!(field_names(&shapes[0]), vec!["p1", "p2", "p3"]);
        assert!(shapes[0].has_discriminant);
    }

    #[test]
    fn test_multiline_tuple_type_fidelity() {
        let source = r#"
export declare class MyWord {
  ShuffleStruct(
    arg0: {
      nouns: [BigNumberish, BigNumberish];
      adjectives: [
        BigNumberish,
        BigNumberish,
        BigNumberish
      ];
      kind: string;
    },
    overrides?: Overrides & { from?: string | Promise<string> }
  ): Promise<ContractTransaction>;
}
"#;
        let shapes = shapes(source).expect("Failed to extract");
        let fields = &shapes[0].fields;

        assert_eq!(fields[0], FieldSpec::new("nouns", "[BigNumberish, BigNumberish]"));
        assert_eq!(
            fields[1],
            FieldSpec::new("adjectives", "[ BigNumberish, BigNumberish, BigNumberish ]")
        );
    }

    #[test]
    fn test_nested_literal_kept_verbatim() {
        let source = r#"
export declare class MyWord {
  DrawStruct(arg0: { commitment: string, treasury: { a: number, b: number, pot: number }, kind: string }): void;
}
"#;
        let shapes = shapes(source).expect("Failed to extract");
        assert_eq!(
            shapes[0].fields,
            vec![
                FieldSpec::new("commitment", "string"),
                FieldSpec::new("treasury", "{ a: number, b: number, pot: number }"),
            ]
        );
    }

    #[test]
    fn test_class_body_rewrites_top_level_commas_only() {
        let source = "export declare class MyWord {\n  DrawStruct(arg0: { a: string, b: { x: number, y: number }, kind: string }): void;\n}\n";
        let document = SourceDocument::parse(source).expect("Failed to parse");
        let interface = locate_interface(&document).expect("interface");
        let options = SchemaOptions::default();
        let methods = locate_struct_methods(&document, &interface, &options);
        let shape = extract_struct(&document, &methods[0], &options).expect("shape");

        assert_eq!(shape.separators.len(), 2);
        assert_eq!(
            shape.class_body(document.text()),
            "{ a: string; b: { x: number, y: number }; kind: string; }"
        );
    }

    #[test]
    fn test_parenthesized_types_unwrapped() {
        let source = r#"
export declare class MyWord {
  RevealStruct(arg0: ({ salt: (BigNumberish | string); kind: string })): void;
}
"#;
        let shapes = shapes(source).expect("Failed to extract");
        assert_eq!(shapes[0].fields, vec![FieldSpec::new("salt", "BigNumberish | string")]);
    }

    #[test]
    fn test_optional_and_untyped_properties() {
        let source = r#"
export declare class MyWord {
  PairStruct(arg0: { salt?: BigNumberish; memo; kind: string }): void;
}
"#;
        let shapes = shapes(source).expect("Failed to extract");
        assert_eq!(
            shapes[0].fields,
            vec![
                FieldSpec::new("salt", "BigNumberish").optional(true),
                FieldSpec::new("memo", "any"),
            ]
        );
    }

    #[test]
    fn test_missing_discriminant_is_reported() {
        let source = "export declare class MyWord {\n  DrawStruct(arg0: { pot: number }): void;\n}\n";
        let shapes = shapes(source).expect("Failed to extract");
        assert!(!shapes[0].has_discriminant);
        assert_eq!(field_names(&shapes[0]), vec!["pot"]);
    }

    #[test]
    fn test_discriminant_type_must_hold_kind() {
        let accepted = "export declare class MyWord {\n  DrawStruct(arg0: { pot: number; kind: \"Draw\" }): void;\n  PairStruct(arg0: { kind: 'Pair' }): void;\n  GuessStruct(arg0: { kind }): void;\n}\n";
        let extracted = shapes(accepted).expect("Failed to extract");
        assert_eq!(extracted.len(), 3);
        assert!(extracted.iter().all(|shape| shape.has_discriminant));

        let numeric = "export declare class MyWord {\n  DrawStruct(arg0: { pot: number; kind: number }): void;\n}\n";
        match shapes(numeric).expect_err("numeric discriminant") {
            SchemaError::UnsupportedMember { method, member } => {
                assert_eq!(method, "DrawStruct");
                assert_eq!(member, "discriminant `kind: number`");
            }
            other => panic!("unexpected error: {other}"),
        }

        let other_kind = "export declare class MyWord {\n  DrawStruct(arg0: { kind: \"Pair\" }): void;\n}\n";
        assert!(matches!(
            shapes(other_kind),
            Err(SchemaError::UnsupportedMember { .. })
        ));
    }

    #[test]
    fn test_trailing_comment_stays_after_terminator() {
        let source = "export declare class MyWord {\n  DrawStruct(\n    arg0: {\n      a: string;\n      b: number // last\n    }\n  ): void;\n}\n";
        let document = SourceDocument::parse(source).expect("Failed to parse");
        let interface = locate_interface(&document).expect("interface");
        let options = SchemaOptions::default();
        let methods = locate_struct_methods(&document, &interface, &options);
        let shape = extract_struct(&document, &methods[0], &options).expect("shape");

        assert_eq!(
            shape.class_body(document.text()),
            "{\n      a: string;\n      b: number; // last\n    }"
        );
    }

    #[test]
    fn test_named_type_parameter_rejected() {
        let source = "export declare class MyWord {\n  DrawStruct(arg0: DrawShape): void;\n}\n";
        let err = shapes(source).expect_err("named type must be rejected");
        match err {
            SchemaError::ExpectedInlineStruct { method, found } => {
                assert_eq!(method, "DrawStruct");
                assert_eq!(found, "`DrawShape`");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_parameter_rejected() {
        let source = "export declare class MyWord {\n  DrawStruct(): void;\n}\n";
        assert!(matches!(
            shapes(source),
            Err(SchemaError::ExpectedInlineStruct { .. })
        ));
    }

    #[test]
    fn test_quoted_property_rejected() {
        let source = "export declare class MyWord {\n  DrawStruct(arg0: { \"pot\": number; kind: string }): void;\n}\n";
        assert!(matches!(
            shapes(source),
            Err(SchemaError::UnsupportedMember { .. })
        ));
    }

    #[test]
    fn test_method_member_rejected() {
        let source = "export declare class MyWord {\n  DrawStruct(arg0: { pot(): number; kind: string }): void;\n}\n";
        assert!(matches!(
            shapes(source),
            Err(SchemaError::UnsupportedMember { .. })
        ));
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let source = "export declare class MyWord {\n  DrawStruct(arg0: { a: [number, number]; kind: string }): void;\n}\n";
        assert_eq!(
            shapes(source).expect("first run"),
            shapes(source).expect("second run")
        );
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_type_text("  [\n\tnumber,\n\tnumber\n]  "), "[ number, number ]");
        assert_eq!(normalize_type_text("Array<  string >"), "Array< string >");
        assert_eq!(normalize_type_text("string"), "string");
    }

    #[test]
    fn test_normalize_preserves_string_literals() {
        assert_eq!(
            normalize_type_text("\"a  b\" |\n  'c\\'  d'"),
            "\"a  b\" | 'c\\'  d'"
        );
    }

    #[test]
    fn test_normalize_drops_comments() {
        assert_eq!(
            normalize_type_text("{\n  a: number; // first\n  b: /* second */ number;\n}"),
            "{ a: number; b: number; }"
        );
    }
}
