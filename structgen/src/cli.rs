//! Command-line interface definition.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use structgen::schema::{DEFAULT_DISCRIMINANT, DEFAULT_STRUCT_SUFFIX};

/// Declaration file read when `--input` is not given.
pub const DEFAULT_INPUT: &str = "typechain/MyWord.d.ts";
/// Generated file written when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "generated/MyWord.ts";

/// Generate TypeScript struct classes from typechain contract declarations.
///
/// Every option is accepted before or after the subcommand.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Generate the struct classes (the default).
    Generate,

    /// Exit non-zero if the generated file is missing or out of date.
    Check,

    /// Print the struct registry without generating anything.
    Describe {
        /// Output format.
        #[arg(long, value_enum, default_value_t = DescribeFormat::Text)]
        format: DescribeFormat,
    },

    /// Generate, then run a command such as the contract compiler.
    Hook {
        /// Command to run after generation.
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },
}

/// Input, output and naming options shared by every command.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Project root that relative paths are resolved against [default: .]
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Declaration file produced by typechain [default: typechain/MyWord.d.ts]
    #[arg(long, global = true)]
    pub input: Option<PathBuf>,

    /// Generated TypeScript file [default: generated/MyWord.ts]
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,

    /// File whose contents replace the default header.
    #[arg(long, global = true)]
    pub prologue_file: Option<PathBuf>,

    /// Method-name suffix marking struct methods [default: Struct]
    #[arg(long, global = true)]
    pub suffix: Option<String>,

    /// Discriminant property name [default: kind]
    #[arg(long, global = true)]
    pub discriminant: Option<String>,
}

impl GenerateArgs {
    pub fn root(&self) -> &Path {
        self.root.as_deref().unwrap_or(Path::new("."))
    }

    pub fn input(&self) -> &Path {
        self.input.as_deref().unwrap_or(Path::new(DEFAULT_INPUT))
    }

    pub fn output(&self) -> &Path {
        self.output.as_deref().unwrap_or(Path::new(DEFAULT_OUTPUT))
    }

    pub fn suffix(&self) -> &str {
        self.suffix.as_deref().unwrap_or(DEFAULT_STRUCT_SUFFIX)
    }

    pub fn discriminant(&self) -> &str {
        self.discriminant.as_deref().unwrap_or(DEFAULT_DISCRIMINANT)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescribeFormat {
    Text,
    Json,
}
