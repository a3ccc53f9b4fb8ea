//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use super::commands;
use claudemd_lint::output::OutputMode;
use claudemd_lint::source::DEFAULT_DOCUMENT;

/// claudemd-lint - Lint your CLAUDE.md files
#[derive(Parser, Debug)]
#[command(
    name = "claudemd-lint",
    version,
    about = "Lint your CLAUDE.md files",
    long_about = "Lint your CLAUDE.md files.\n\n\
                  Checks size, structure, content, hook candidates and secrets,\n\
                  then scores the file from 0 to 10. Exits 1 when errors are found."
)]
pub struct Cli {
    /// Path to the CLAUDE.md file
    #[arg(default_value = DEFAULT_DOCUMENT)]
    pub file: String,

    /// Config file (default: .claudemd-lint.toml next to the linted file)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum Command {
    /// List every rule with its description
    Rules,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Rules) => Ok(commands::rules(output_mode)),
        None => commands::lint(&cli.file, cli.config.as_deref(), output_mode),
    }
}
