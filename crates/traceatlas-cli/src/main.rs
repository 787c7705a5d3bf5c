//! Traceatlas CLI - Convert the doctrine traceability workbook into JSON.

use clap::Parser;
use traceatlas_cli::commands;
use traceatlas_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing (log to stderr, RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> traceatlas_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config, then let flags override it
    let config = Config::load(cli.config.as_deref())?
        .with_overrides(cli.input.clone(), cli.output_dir.clone());
    config.validate()?;

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(color_enabled);

    match cli.resolved_command() {
        Command::Convert(args) => commands::execute_convert(args, &config, &formatter),
        Command::Validate => commands::execute_validate(&config, &formatter),
        Command::Inspect => commands::execute_inspect(&config, &formatter),
    }
}
