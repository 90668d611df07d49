//! Main code generator.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::typescript::{ClassSynthesizer, Emitter, OutputDocument};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use structgen_schema::{StructRegistry, load_source, parse_registry};

/// Summary of a completed generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// File that was written.
    pub output: PathBuf,
    /// Generated class names in output order.
    pub classes: Vec<String>,
    /// Size of the written file.
    pub bytes: usize,
}

/// State of an existing output file relative to its declaration source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Output matches what would be generated.
    UpToDate,
    /// Output differs from what would be generated.
    Stale,
    /// Output file does not exist.
    Missing,
}

impl CheckStatus {
    /// Returns true if the output needs regenerating.
    #[must_use]
    pub const fn needs_regeneration(self) -> bool {
        !matches!(self, Self::UpToDate)
    }
}

/// Struct class generator.
pub struct Generator<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generates the output document for a struct registry.
    #[must_use]
    pub fn generate(&self, registry: &StructRegistry) -> OutputDocument {
        let synthesizer = ClassSynthesizer::new(self.config);
        let mut document = OutputDocument::new(self.config.prologue.clone());

        for descriptor in &registry.structs {
            tracing::debug!(
                "Generating class {} from {}",
                descriptor.kind,
                descriptor.source_method
            );
            document.push(synthesizer.synthesize(descriptor));
        }

        document
    }

    /// Generates the output document for declaration source text.
    ///
    /// # Errors
    /// Returns `CodegenError` if the source does not parse or does not match
    /// the expected interface shape.
    pub fn generate_source(&self, source: &str) -> Result<OutputDocument, CodegenError> {
        let registry = parse_registry(source, &self.config.schema)?;
        Ok(self.generate(&registry))
    }

    /// Generates the output document for a declaration file.
    ///
    /// # Errors
    /// Returns `CodegenError` if the file cannot be read or its contents are
    /// rejected.
    pub fn generate_file(&self, input: &Path) -> Result<OutputDocument, CodegenError> {
        let source = load_source(input).map_err(|e| CodegenError::io(input, e))?;
        self.generate_source(&source)
    }

    /// Reads `input`, generates every struct class and writes `output`.
    ///
    /// Nothing is written unless generation succeeds for every struct.
    ///
    /// # Errors
    /// Returns `CodegenError` on the first failure.
    pub fn run(&self, input: &Path, output: &Path) -> Result<GenerationReport, CodegenError> {
        let document = self.generate_file(input)?;
        let bytes = Emitter::new().write(output, &document)?;

        Ok(GenerationReport {
            output: output.to_path_buf(),
            classes: document.class_names().map(str::to_string).collect(),
            bytes,
        })
    }

    /// Compares `output` against what `run` would write, without writing.
    ///
    /// # Errors
    /// Returns `CodegenError` if generation fails or the output exists but
    /// cannot be read.
    pub fn check(&self, input: &Path, output: &Path) -> Result<CheckStatus, CodegenError> {
        let expected = self.generate_file(input)?.render();

        match fs::read_to_string(output) {
            Ok(existing) if existing == expected => Ok(CheckStatus::UpToDate),
            Ok(_) => Ok(CheckStatus::Stale),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(CheckStatus::Missing),
            Err(e) => Err(CodegenError::io(output, e)),
        }
    }
}
