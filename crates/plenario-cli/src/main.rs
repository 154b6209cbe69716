//! Plenario CLI - Build legislator alignment networks from enriched records.

use clap::Parser;
use plenario_cli::commands;
use plenario_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> plenario_cli::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Logs go to stderr so stdout stays machine-readable
    let level = if cli.verbose {
        "debug"
    } else {
        config.settings.log_level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Edges(args) => commands::execute_edges(args, &config, &formatter)?,
        Command::Export(args) => commands::execute_export(args, &config, &formatter)?,
        Command::Summary(args) => commands::execute_summary(args, &config, &formatter)?,
        Command::Config(args) => commands::execute_config(args, &config, &formatter)?,
    }

    Ok(())
}
