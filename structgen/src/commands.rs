//! Command implementations.

use crate::cli::{DescribeFormat, GenerateArgs};
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::PathBuf;
use std::process;
use structgen::codegen::{CheckStatus, Generator, GeneratorConfig};
use structgen::schema::{StructRegistry, load_source, parse_registry};

/// Exit status of a successful command.
pub const SUCCESS: u8 = 0;
/// Exit status of a failed check or command.
pub const FAILURE: u8 = 1;

/// Paths and configuration resolved against the project root.
pub struct Invocation {
    pub input: PathBuf,
    pub output: PathBuf,
    pub config: GeneratorConfig,
}

impl Invocation {
    /// Resolves command arguments relative to `root`.
    pub fn resolve(args: &GenerateArgs) -> Result<Self> {
        let root = args.root();
        let mut config = GeneratorConfig::new()
            .struct_suffix(args.suffix())
            .discriminant(args.discriminant());

        if let Some(path) = &args.prologue_file {
            let path = root.join(path);
            let prologue = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read prologue {}", path.display()))?;
            config = config.prologue(prologue);
        }

        Ok(Self {
            input: root.join(args.input()),
            output: root.join(args.output()),
            config,
        })
    }
}

pub fn generate(args: &GenerateArgs) -> Result<u8> {
    let invocation = Invocation::resolve(args)?;
    let report = Generator::new(&invocation.config).run(&invocation.input, &invocation.output)?;

    tracing::info!(
        "Generated {} struct classes: {}",
        report.classes.len(),
        report.classes.join(", ")
    );
    Ok(SUCCESS)
}

pub fn check(args: &GenerateArgs) -> Result<u8> {
    let invocation = Invocation::resolve(args)?;
    let status = Generator::new(&invocation.config).check(&invocation.input, &invocation.output)?;

    match status {
        CheckStatus::UpToDate => {
            tracing::info!("{} is up to date", invocation.output.display());
            Ok(SUCCESS)
        }
        CheckStatus::Stale => {
            tracing::warn!("{} is out of date", invocation.output.display());
            Ok(FAILURE)
        }
        CheckStatus::Missing => {
            tracing::warn!("{} does not exist", invocation.output.display());
            Ok(FAILURE)
        }
    }
}

pub fn describe(args: &GenerateArgs, format: DescribeFormat) -> Result<u8> {
    let invocation = Invocation::resolve(args)?;
    let source = load_source(&invocation.input)
        .with_context(|| format!("Failed to read {}", invocation.input.display()))?;
    let registry = parse_registry(&source, &invocation.config.schema)?;

    match format {
        DescribeFormat::Json => println!("{}", serde_json::to_string_pretty(&registry)?),
        DescribeFormat::Text => print!("{}", render_registry(&registry)),
    }
    Ok(SUCCESS)
}

pub fn hook(args: &GenerateArgs, command: &[String]) -> Result<u8> {
    let Some((program, rest)) = command.split_first() else {
        bail!("no command given");
    };

    generate(args)?;

    tracing::debug!("Running {}", command.join(" "));
    let status = process::Command::new(program)
        .args(rest)
        .current_dir(args.root())
        .status()
        .with_context(|| format!("Failed to run {program}"))?;

    if status.success() {
        return Ok(SUCCESS);
    }
    tracing::warn!("{program} exited with {status}");
    let code = status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .filter(|code| *code != 0)
        .unwrap_or(FAILURE);
    Ok(code)
}

fn render_registry(registry: &StructRegistry) -> String {
    let mut output = format!(
        "{} ({} struct kinds, discriminant '{}')\n",
        registry.interface,
        registry.len(),
        registry.discriminant
    );

    for descriptor in &registry.structs {
        output.push_str(&format!("{} <- {}\n", descriptor.kind, descriptor.source_method));
        for field in &descriptor.fields {
            let marker = if field.optional { "?" } else { "" };
            output.push_str(&format!("  {}{marker}: {}\n", field.name, field.type_text));
        }
        if !descriptor.has_discriminant {
            output.push_str(&format!("  ({} added)\n", registry.discriminant));
        }
    }

    output
}
