use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Dinopark - build and inspect secured dinosaur enclosures
#[derive(Parser, Debug)]
#[command(name = "dinopark")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./dinopark.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a new enclosure and save it to the store
    Build {
        /// Number of security devices to attach
        #[arg(short, long, default_value_t = 1)]
        securities: usize,

        /// Number of velociraptors to admit
        #[arg(short, long, default_value_t = 3)]
        dinosaurs: usize,

        /// Store file (overrides the configured path)
        #[arg(long, conflicts_with = "dry_run")]
        store: Option<PathBuf>,

        /// Build in memory only, nothing is written
        #[arg(long)]
        dry_run: bool,
    },

    /// List every enclosure in the store
    Show {
        /// Store file (overrides the configured path)
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Describe a single dinosaur
    Describe {
        /// Genus name
        #[arg(long, default_value = dinopark::domain::entities::UNKNOWN_GENUS)]
        genus: String,

        /// Whether the dinosaur eats meat
        #[arg(long)]
        carnivorous: bool,

        /// Length in meters
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        length: i64,
    },
}
