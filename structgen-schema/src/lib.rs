//! # structgen Schema
//!
//! TypeScript declaration parsing and struct schema extraction.
//!
//! This crate provides:
//! - Range-annotated parsing of generated `.d.ts` files
//! - Location of the exported contract interface and its struct methods
//! - Verbatim extraction of struct field types by source range
//! - An explicit struct registry consumed by code generation

pub mod error;
pub mod extract;
pub mod ir;
pub mod locator;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use extract::{StructShape, extract_struct, normalize_type_text};
pub use ir::{StructDescriptor, StructRegistry};
pub use locator::{InterfaceDeclaration, StructMethod, locate_interface, locate_struct_methods};
pub use parser::{SourceDocument, load_source};
pub use types::{
    DEFAULT_DISCRIMINANT, DEFAULT_STRUCT_SUFFIX, FieldSpec, Location, SchemaOptions, Span,
};
pub use validation::validate_registry;

/// Parses declaration source text and builds its struct registry.
///
/// # Arguments
/// * `source` - Contents of the generated declaration file
/// * `options` - Naming conventions used to detect struct methods
///
/// # Errors
/// Returns `SchemaError` if the text does not parse or does not match the
/// expected interface shape.
pub fn parse_registry(source: &str, options: &SchemaOptions) -> Result<StructRegistry, SchemaError> {
    let document = SourceDocument::parse(source)?;
    StructRegistry::from_document(&document, options)
}
