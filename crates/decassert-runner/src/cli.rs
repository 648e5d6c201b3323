use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "decassert-runner")]
#[command(about = "Evaluate decimal-aware assertion case files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run every case in a case file and report pass/fail/error per case.
    Check(CheckCommand),
}

#[derive(Debug, Clone, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, clap::Args)]
pub struct CheckCommand {
    #[arg(long)]
    pub cases: PathBuf,
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Stop at the first case that does not pass.
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
