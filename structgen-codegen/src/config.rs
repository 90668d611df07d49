//! Generator configuration.

use structgen_schema::SchemaOptions;

/// Header written at the top of every generated file.
pub const DEFAULT_PROLOGUE: &str = r#"// AUTO GENERATED FILE - DO NOT EDIT

import {
    BigNumberish,
} from "ethers";
import { BytesLike } from "@ethersproject/bytes";"#;

/// Member indentation used when a struct literal fits on one line.
pub const DEFAULT_INDENT: &str = "  ";

/// Configuration for a generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Struct detection conventions.
    pub schema: SchemaOptions,
    /// Text placed before the generated classes.
    pub prologue: String,
    /// Fallback member indentation.
    pub indent: String,
}

impl GeneratorConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema: SchemaOptions::default(),
            prologue: DEFAULT_PROLOGUE.to_string(),
            indent: DEFAULT_INDENT.to_string(),
        }
    }

    /// Sets the prologue.
    #[must_use]
    pub fn prologue(mut self, prologue: impl Into<String>) -> Self {
        self.prologue = prologue.into();
        self
    }

    /// Sets the struct method suffix.
    #[must_use]
    pub fn struct_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.schema = self.schema.struct_suffix(suffix);
        self
    }

    /// Sets the discriminant property name.
    #[must_use]
    pub fn discriminant(mut self, name: impl Into<String>) -> Self {
        self.schema = self.schema.discriminant(name);
        self
    }

    /// Sets the fallback member indentation.
    #[must_use]
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
