//! ClaimOrder CLI - Interactive frontend for ordering dependent claims.

use anyhow::Context;
use claimorder_cli::commands;
use claimorder_cli::repl;
use claimorder_cli::{logging, Cli, Command, Config, Formatter};
use clap::Parser;
use std::path::PathBuf;
use tracing::warn;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => PathBuf::from(path),
        None => Config::path()?,
    };

    // A broken config file should not keep the REPL from starting.
    let (config, load_error) = match Config::load_from(&config_path) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    logging::init(&config.settings.log_level);
    if let Some(e) = load_error {
        warn!(path = %config_path.display(), error = %e, "Falling back to default configuration");
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&config, &formatter).context("REPL session failed")?;
        }
        Some(Command::Order(args)) => {
            commands::execute_order(args, &formatter).context("Could not order claims")?;
        }
        Some(Command::Config(args)) => {
            commands::execute_config(args, &config, &config_path, &formatter)?;
        }
    }

    Ok(())
}
