//! Command-line arguments.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Elixir Tracker - pick the elixirs that reach a reference point target
#[derive(Debug, Parser)]
#[command(name = "elixir")]
#[command(about = "Pick the elixirs that reach a reference point target")]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the inventory JSON file (overrides the config file)
    #[arg(long, global = true)]
    pub inventory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Choose elixirs whose points reach the target
    Select {
        /// Target reference points (positive whole number)
        #[arg(short, long, allow_hyphen_values = true)]
        target: String,

        /// Elixir types to draw from, comma separated (default: all)
        #[arg(long, value_delimiter = ',')]
        types: Option<Vec<String>>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show point totals per type and overall
    Totals {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the configured tiers and types
    Catalog,
}

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
