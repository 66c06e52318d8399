//! snipgen CLI Binary
//!
//! Command-line interface for expanding snippet templates.

use clap::Parser;
use snipgen::cli::{Cli, RunContext};
use snipgen::config::{ConfigLoader, SnipgenConfig};
use snipgen::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let loaded = ConfigLoader::load_for(&cli.workspace, cli.config.as_deref());

    let logging_config = build_logging_config(&cli, loaded.as_ref().ok());
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("snipgen starting");

    let context = match loaded.and_then(|config| RunContext::with_config(cli.workspace.clone(), config)) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error loading configuration: {}", e);
            eprintln!("{}", snipgen::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", snipgen::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and the loaded config.
/// Precedence: CLI flags override config file override defaults.
/// Defaults apply when the config failed to load, so that failure can still be logged.
fn build_logging_config(cli: &Cli, loaded: Option<&SnipgenConfig>) -> LoggingConfig {
    let mut config = loaded.map(|c| c.logging.clone()).unwrap_or_default();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
