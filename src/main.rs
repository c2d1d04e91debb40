//! Dinopark CLI - build and inspect dinosaur enclosures
//!
//! Usage: dinopark <COMMAND>
//!
//! Commands:
//!   build     Build a new enclosure and save it to the store
//!   show      List every enclosure in the store
//!   describe  Describe a single dinosaur

mod cli;
mod commands;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dinopark::config::{Config, LoggingConfig};
use dinopark::presentation::OutputFormat;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let format = OutputFormat::from_json_flag(cli.json);

    match cli.command {
        Commands::Build {
            securities,
            dinosaurs,
            store,
            dry_run,
        } => {
            let config = load_config(cli.config.as_deref(), cli.verbose)?;
            commands::cmd_build(
                &config,
                securities,
                dinosaurs,
                store.as_deref(),
                dry_run,
                format,
            )
        }
        Commands::Show { store } => {
            let config = load_config(cli.config.as_deref(), cli.verbose)?;
            commands::cmd_show(&config, store.as_deref(), format)
        }
        Commands::Describe {
            genus,
            carnivorous,
            length,
        } => {
            init_tracing(cli.verbose, &LoggingConfig::default().filter);
            commands::cmd_describe(&genus, carnivorous, length, format)
        }
    }
}

/// Resolve the configuration, then install logging and report its warnings
fn load_config(explicit: Option<&Path>, verbose: u8) -> Result<Config> {
    let working_dir = std::env::current_dir()?;
    let (config, warnings) = Config::resolve(explicit, &working_dir)?;

    init_tracing(verbose, &config.logging.filter);
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    Ok(config)
}

fn log_filter(verbose: u8, configured: &str) -> &str {
    match verbose {
        0 => configured,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Logs go to stderr. `RUST_LOG` wins, then `-v`, then the configured filter
fn init_tracing(verbose: u8, configured: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter(verbose, configured)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
