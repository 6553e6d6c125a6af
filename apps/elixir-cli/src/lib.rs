//! # elixir-cli: Command-Line Front End
//!
//! Wires configuration, the inventory file and `elixir-core` together.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Cli ──► AppConfig::load ──► Catalog                                   │
//! │                 │                                                       │
//! │                 └──► inventory path ──► load_inventory ──► Inventory   │
//! │                                                                         │
//! │  execute(command, &catalog, &inventory)                                │
//! │     select   ──► select_from_input ──► render_selection                │
//! │     totals   ──► Inventory::summary ──► render_summary                 │
//! │     catalog  ──► render_catalog                                        │
//! │                                                                         │
//! │  Report → stdout        Logs → stderr                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod inventory_file;
pub mod report;

use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use elixir_core::{select_from_input, Catalog, Inventory};

use crate::cli::{Cli, Commands};
use crate::config::AppConfig;
use crate::error::AppResult;
use crate::inventory_file::load_inventory;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=elixir=trace` - Show trace for elixir crates only
/// - Default: INFO level, DEBUG for elixir crates
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,elixir=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs a parsed command line and returns the report to print.
pub fn run(cli: Cli) -> AppResult<String> {
    let mut config = load_config(cli.config)?;
    if let Some(path) = cli.inventory {
        debug!(?path, "Inventory path from command line");
        config.inventory.path = Some(path);
    }

    let catalog = config.catalog()?;

    if matches!(cli.command, Commands::Catalog) {
        return execute(cli.command, &catalog, &Inventory::empty_for(&catalog));
    }

    let path = config.inventory_path()?;
    let inventory = load_inventory(&path, &catalog)?;

    execute(cli.command, &catalog, &inventory)
}

/// An explicit config path must load; a broken default config falls back to
/// the built-in catalog with a warning.
fn load_config(config_path: Option<PathBuf>) -> AppResult<AppConfig> {
    match config_path {
        Some(path) => AppConfig::load(Some(path)),
        None => Ok(AppConfig::load_or_default(None)),
    }
}

/// Executes one command against an already loaded catalog and inventory.
pub fn execute(command: Commands, catalog: &Catalog, inventory: &Inventory) -> AppResult<String> {
    match command {
        Commands::Select {
            target,
            types,
            format,
        } => {
            let types: Vec<String> = match types {
                Some(types) => types
                    .into_iter()
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .collect(),
                None => catalog.type_names().map(str::to_string).collect(),
            };

            for unknown in types.iter().filter(|t| catalog.elixir_type(t).is_none()) {
                warn!(elixir_type = %unknown, "Selected type is not in the catalog");
            }

            let result = select_from_input(catalog, inventory, &target, &types);
            info!(
                raw_target = %target.trim(),
                achieved = result.achieved.value(),
                items = result.item_count(),
                reached = result.status.is_reached(),
                status = ?result.status,
                "Selection computed"
            );

            report::render_selection(catalog, &result, format)
        }
        Commands::Totals { format } => {
            let summary = inventory.summary(catalog);
            debug!(overall = summary.overall.value(), "Totals computed");
            report::render_summary(&summary, format)
        }
        Commands::Catalog => Ok(report::render_catalog(catalog)),
    }
}
