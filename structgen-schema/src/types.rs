//! Schema type definitions.
//!
//! This module contains the small value types shared by the locator, the
//! field extractor and code generation: source spans, diagnostic locations,
//! extracted fields and the naming conventions used to detect structs.

use serde::Serialize;
use std::fmt;
use tree_sitter::Node;

/// Method-name suffix marking a struct-accepting method.
pub const DEFAULT_STRUCT_SUFFIX: &str = "Struct";

/// Property name of the discriminant field.
pub const DEFAULT_DISCRIMINANT: &str = "kind";

/// Byte range `[start, end)` into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    /// Start offset (inclusive).
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the byte range covered by a syntax node.
    #[must_use]
    pub fn of(node: &Node<'_>) -> Self {
        Self::new(node.start_byte(), node.end_byte())
    }

    /// Returns the length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns the covered slice of `text`.
    #[must_use]
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// Human-readable position in the source text (1-based line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number in bytes, starting at 1.
    pub column: usize,
    /// Byte offset into the source text.
    pub offset: usize,
}

impl Location {
    /// Returns the start position of a syntax node.
    #[must_use]
    pub fn of(node: &Node<'_>) -> Self {
        let point = node.start_position();
        Self {
            line: point.row + 1,
            column: point.column + 1,
            offset: node.start_byte(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// One property of a struct's parameter type literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Property name.
    pub name: String,
    /// Normalized source text of the property's type.
    pub type_text: String,
    /// Whether the property was declared with `?`.
    pub optional: bool,
}

impl FieldSpec {
    /// Creates a required field.
    #[must_use]
    pub fn new(name: impl Into<String>, type_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_text: type_text.into(),
            optional: false,
        }
    }

    /// Marks the field optional.
    #[must_use]
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Returns the type used for this field's constructor parameter.
    ///
    /// Optional fields keep their position and accept `undefined`.
    #[must_use]
    pub fn parameter_type(&self) -> String {
        if !self.optional {
            return self.type_text.clone();
        }
        if self.type_text.contains("=>") {
            format!("({}) | undefined", self.type_text)
        } else {
            format!("{} | undefined", self.type_text)
        }
    }
}

/// Naming conventions used to detect struct methods in the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaOptions {
    /// Suffix a method name must carry to be treated as a struct.
    pub struct_suffix: String,
    /// Property name of the discriminant field.
    pub discriminant: String,
}

impl SchemaOptions {
    /// Creates options with the default conventions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            struct_suffix: DEFAULT_STRUCT_SUFFIX.to_string(),
            discriminant: DEFAULT_DISCRIMINANT.to_string(),
        }
    }

    /// Sets the struct method suffix.
    #[must_use]
    pub fn struct_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.struct_suffix = suffix.into();
        self
    }

    /// Sets the discriminant property name.
    #[must_use]
    pub fn discriminant(mut self, name: impl Into<String>) -> Self {
        self.discriminant = name.into();
        self
    }

    /// Returns the struct kind for a method name, if it carries the suffix.
    #[must_use]
    pub fn kind_of<'a>(&self, method: &'a str) -> Option<&'a str> {
        method.strip_suffix(self.struct_suffix.as_str())
    }
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_slice() {
        let text = "arg0: { a: number }";
        let span = Span::new(6, 19);
        assert_eq!(span.slice(text), "{ a: number }");
        assert_eq!(span.len(), 13);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_optional_parameter_type() {
        let field = FieldSpec::new("salt", "BigNumberish").optional(true);
        assert_eq!(field.parameter_type(), "BigNumberish | undefined");

        let callback = FieldSpec::new("cb", "() => void").optional(true);
        assert_eq!(callback.parameter_type(), "(() => void) | undefined");

        let required = FieldSpec::new("pot", "number");
        assert_eq!(required.parameter_type(), "number");
    }

    #[test]
    fn test_kind_of() {
        let options = SchemaOptions::default();
        assert_eq!(options.kind_of("ShuffleStruct"), Some("Shuffle"));
        assert_eq!(options.kind_of("Struct"), Some(""));
        assert_eq!(options.kind_of("validTransition"), None);

        let custom = SchemaOptions::new().struct_suffix("Shape");
        assert_eq!(custom.kind_of("DrawShape"), Some("Draw"));
    }

    #[test]
    fn test_location_display() {
        let location = Location {
            line: 12,
            column: 5,
            offset: 300,
        };
        assert_eq!(location.to_string(), "line 12, column 5");
    }
}
