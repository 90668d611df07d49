//! # structgen Codegen
//!
//! TypeScript struct class generation from contract declaration files.
//!
//! This crate provides:
//! - One exported class per struct kind, with a positional constructor
//! - Discriminant assignment in every constructor
//! - Output file rendering with a configurable prologue
//! - Atomic writes that leave the previous output intact on failure

pub mod config;
pub mod error;
pub mod generator;
pub mod typescript;

pub use config::{DEFAULT_INDENT, DEFAULT_PROLOGUE, GeneratorConfig};
pub use error::CodegenError;
pub use generator::{CheckStatus, GenerationReport, Generator};

/// Generates TypeScript classes from declaration source text.
///
/// # Arguments
/// * `source` - Contents of the generated declaration file
/// * `config` - Generator configuration
///
/// # Returns
/// Generated TypeScript source as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_source(source: &str, config: &GeneratorConfig) -> Result<String, CodegenError> {
    let generator = Generator::new(config);
    Ok(generator.generate_source(source)?.render())
}

/// Generates TypeScript classes from a declaration file.
///
/// # Arguments
/// * `path` - Path to the declaration file
/// * `config` - Generator configuration
///
/// # Returns
/// Generated TypeScript source as a string.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(
    path: &std::path::Path,
    config: &GeneratorConfig,
) -> Result<String, CodegenError> {
    let generator = Generator::new(config);
    Ok(generator.generate_file(path)?.render())
}
