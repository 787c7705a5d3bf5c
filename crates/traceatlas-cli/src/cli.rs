//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Traceatlas - Convert the doctrine traceability workbook into JSON.
#[derive(Debug, Parser)]
#[command(name = "traceatlas")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Workbook to read (overrides the configured input)
    #[arg(short, long, global = true, env = "TRACEATLAS_INPUT")]
    pub input: Option<PathBuf>,

    /// Directory for the JSON documents (overrides the configured output_dir)
    #[arg(short, long, global = true, env = "TRACEATLAS_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Re-read and check the written files (when no subcommand is given)
    #[arg(long)]
    pub validate: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert the workbook into the six JSON documents (default)
    Convert(ConvertArgs),

    /// Check an existing output directory
    Validate,

    /// List the workbook's sheets with their headers and row counts
    Inspect,
}

/// Arguments for the convert command.
#[derive(Debug, Clone, Default, Args)]
pub struct ConvertArgs {
    /// Re-read and check the written files
    #[arg(long)]
    pub validate: bool,
}

impl Cli {
    /// Resolve the command to run; no subcommand means `convert`
    pub fn resolved_command(&self) -> Command {
        match &self.command {
            None => Command::Convert(ConvertArgs {
                validate: self.validate,
            }),
            Some(Command::Convert(args)) => Command::Convert(ConvertArgs {
                validate: args.validate || self.validate,
            }),
            Some(Command::Validate) => Command::Validate,
            Some(Command::Inspect) => Command::Inspect,
        }
    }
}
