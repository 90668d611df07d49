//! Struct class synthesis.
//!
//! Each struct kind becomes an exported class whose body is the struct's
//! type literal copied from the declaration file, with a constructor spliced
//! in as the last member. The constructor takes every field in declaration
//! order and always finishes by assigning the discriminant.

use crate::config::GeneratorConfig;
use structgen_schema::{FieldSpec, StructDescriptor};

/// A synthesized TypeScript class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedClass {
    /// Class name (the struct kind).
    pub class_name: String,
    /// Constructor fields in order.
    pub fields: Vec<FieldSpec>,
    /// Class body, braces and constructor included.
    pub body_text: String,
}

impl GeneratedClass {
    /// Returns the complete class declaration.
    #[must_use]
    pub fn source(&self) -> String {
        format!("export class {} {}", self.class_name, self.body_text)
    }
}

/// Generator for struct classes.
pub struct ClassSynthesizer<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> ClassSynthesizer<'a> {
    /// Creates a new class synthesizer.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Synthesizes the class for one struct kind.
    #[must_use]
    pub fn synthesize(&self, descriptor: &StructDescriptor) -> GeneratedClass {
        let body = dedent(&descriptor.body.replace("\r\n", "\n"));

        let member_indent = member_indent(&body).unwrap_or(self.config.indent.as_str());
        let unit = member_indent
            .strip_prefix(closing_indent(&body))
            .filter(|unit| !unit.is_empty())
            .unwrap_or(self.config.indent.as_str());
        let statement_indent = format!("{member_indent}{unit}");

        let declaration = if descriptor.has_discriminant {
            None
        } else {
            tracing::warn!(
                "Struct {} declares no '{}' property, adding one",
                descriptor.kind,
                self.config.schema.discriminant
            );
            Some(format!(
                "{member_indent}{}: string;",
                self.config.schema.discriminant
            ))
        };

        let constructor = self.generate_constructor(descriptor, member_indent, &statement_indent);

        GeneratedClass {
            class_name: descriptor.kind.clone(),
            fields: descriptor.fields.clone(),
            body_text: splice_constructor(&body, declaration.as_deref(), &constructor),
        }
    }

    /// Generates the constructor member.
    fn generate_constructor(
        &self,
        descriptor: &StructDescriptor,
        member_indent: &str,
        statement_indent: &str,
    ) -> String {
        let parameters = descriptor
            .fields
            .iter()
            .map(|field| format!("{}: {}", field.name, field.parameter_type()))
            .collect::<Vec<_>>()
            .join(", ");

        let mut output = String::new();
        output.push_str(&format!("{member_indent}constructor({parameters}) {{\n"));
        for field in &descriptor.fields {
            output.push_str(&format!(
                "{statement_indent}this.{0} = {0};\n",
                field.name
            ));
        }
        output.push_str(&format!(
            "{statement_indent}this.{} = \"{}\";\n",
            self.config.schema.discriminant, descriptor.kind
        ));
        output.push_str(&format!("{member_indent}}}"));

        output
    }
}

/// Removes the closing brace's indentation from every line but the first.
fn dedent(body: &str) -> String {
    let indent = closing_indent(body);
    if indent.is_empty() {
        return body.to_string();
    }

    body.split('\n')
        .enumerate()
        .map(|(i, line)| if i == 0 { line } else { strip_indent(line, indent) })
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_indent<'a>(line: &'a str, indent: &str) -> &'a str {
    if let Some(rest) = line.strip_prefix(indent) {
        return rest;
    }

    // Under-indented or differently indented line: drop at most as many
    // leading whitespace characters as the indent has.
    let cut = line
        .char_indices()
        .take_while(|(_, c)| c.is_whitespace())
        .take(indent.chars().count())
        .last()
        .map_or(0, |(i, c)| i + c.len_utf8());
    &line[cut..]
}

/// Leading whitespace of a multi-line body's closing-brace line.
fn closing_indent(body: &str) -> &str {
    let Some((_, last)) = body.rsplit_once('\n') else {
        return "";
    };
    let trimmed = last.trim_start();
    if trimmed.starts_with('}') {
        &last[..last.len() - trimmed.len()]
    } else {
        ""
    }
}

/// Leading whitespace of the first member line of a multi-line body.
fn member_indent(body: &str) -> Option<&str> {
    body.split('\n')
        .skip(1)
        .find(|line| {
            let trimmed = line.trim_start();
            !trimmed.is_empty() && !trimmed.starts_with('}')
        })
        .map(|line| &line[..line.len() - line.trim_start().len()])
}

/// Inserts members immediately before the body's closing brace.
///
/// The body's members are already terminated.
fn splice_constructor(body: &str, declaration: Option<&str>, constructor: &str) -> String {
    let close = body.rfind('}').unwrap_or(body.len());
    let head = &body[..close];
    let brace_indent = match head.rsplit_once('\n') {
        Some((_, last)) if last.trim().is_empty() => last,
        _ => "",
    };
    let head = head.trim_end();

    let mut output = String::with_capacity(body.len() + constructor.len() + 8);
    output.push_str(head);
    if let Some(declaration) = declaration {
        output.push('\n');
        output.push_str(declaration);
    }
    output.push_str(if output.ends_with('{') { "\n" } else { "\n\n" });
    output.push_str(constructor);
    output.push('\n');
    output.push_str(brace_indent);
    output.push('}');

    output
}
