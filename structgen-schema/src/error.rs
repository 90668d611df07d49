//! Error types for declaration parsing and schema extraction.

use crate::types::Location;
use thiserror::Error;

/// Error type for parsing declaration source text.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The TypeScript grammar could not be loaded into the parser.
    #[error("failed to load TypeScript grammar: {message}")]
    Language {
        /// Error message.
        message: String,
    },

    /// The parser returned without producing a tree.
    #[error("parser produced no syntax tree")]
    Aborted,

    /// Malformed source text.
    #[error("syntax error at {location}: {message}")]
    Syntax {
        /// Position of the first offending node.
        location: Location,
        /// Error message.
        message: String,
    },
}

/// Error type for schema location, extraction and validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// No exported class declaration in the document.
    #[error("no interface declaration found")]
    NoInterface,

    /// A struct method whose first parameter is not an inline type literal.
    #[error("method '{method}': expected inline struct type, found {found}")]
    ExpectedInlineStruct {
        /// Source method name.
        method: String,
        /// What was found instead.
        found: String,
    },

    /// A struct literal member that cannot become a class field.
    #[error("method '{method}': unsupported struct member {member}")]
    UnsupportedMember {
        /// Source method name.
        method: String,
        /// Description of the member.
        member: String,
    },

    /// A struct method named exactly like the suffix.
    #[error("method '{method}' has an empty struct kind")]
    EmptyKind {
        /// Source method name.
        method: String,
    },

    /// Two struct methods resolve to the same kind.
    #[error("duplicate struct kind '{kind}'")]
    DuplicateKind {
        /// Struct kind.
        kind: String,
    },

    /// A field declared twice within one struct.
    #[error("duplicate field '{field}' in struct '{kind}'")]
    DuplicateField {
        /// Struct kind.
        kind: String,
        /// Field name.
        field: String,
    },

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl ParseError {
    /// Creates a grammar loading error.
    pub fn language(message: impl Into<String>) -> Self {
        Self::Language {
            message: message.into(),
        }
    }

    /// Creates a syntax error at the given location.
    pub fn syntax(location: Location, message: impl Into<String>) -> Self {
        Self::Syntax {
            location,
            message: message.into(),
        }
    }

    /// Returns the location of a syntax error, if any.
    #[must_use]
    pub fn location(&self) -> Option<Location> {
        match self {
            Self::Syntax { location, .. } => Some(*location),
            _ => None,
        }
    }
}

impl SchemaError {
    /// Creates an expected-inline-struct error.
    pub fn expected_struct(method: impl Into<String>, found: impl Into<String>) -> Self {
        Self::ExpectedInlineStruct {
            method: method.into(),
            found: found.into(),
        }
    }

    /// Creates an unsupported member error.
    pub fn unsupported(method: impl Into<String>, member: impl Into<String>) -> Self {
        Self::UnsupportedMember {
            method: method.into(),
            member: member.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_interface_message() {
        assert_eq!(
            SchemaError::NoInterface.to_string(),
            "no interface declaration found"
        );
    }

    #[test]
    fn test_syntax_error_reports_location() {
        let err = ParseError::syntax(
            Location {
                line: 3,
                column: 7,
                offset: 42,
            },
            "missing }",
        );
        assert_eq!(err.to_string(), "syntax error at line 3, column 7: missing }");
        assert_eq!(err.location().map(|l| l.offset), Some(42));
    }

    #[test]
    fn test_expected_struct_message() {
        let err = SchemaError::expected_struct("DrawStruct", "type_identifier");
        assert!(err.to_string().contains("expected inline struct type"));
        assert!(err.to_string().contains("DrawStruct"));
    }
}
