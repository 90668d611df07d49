//! Prelude module for convenient imports.
//!
//! ```ignore
//! use structgen::prelude::*;
//! ```

// Schema types
pub use structgen_schema::{
    FieldSpec, SchemaError, SchemaOptions, StructDescriptor, StructRegistry, parse_registry,
};

// Codegen types
pub use structgen_codegen::{
    CheckStatus, CodegenError, GenerationReport, Generator, GeneratorConfig,
};

pub use std::path::Path;
