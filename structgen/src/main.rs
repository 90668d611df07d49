//! structgen command-line entry point.
//!
//! Usage:
//!   structgen                          generate generated/MyWord.ts
//!   structgen check                    fail if the generated file is stale
//!   structgen describe --format json   print the struct registry
//!   structgen hook -- npx hardhat compile

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Command};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    let result = match &cli.command {
        None | Some(Command::Generate) => commands::generate(&cli.generate),
        Some(Command::Check) => commands::check(&cli.generate),
        Some(Command::Describe { format }) => commands::describe(&cli.generate, *format),
        Some(Command::Hook { command }) => commands::hook(&cli.generate, command),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
