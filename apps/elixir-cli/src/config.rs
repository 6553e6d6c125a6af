//! # CLI Configuration
//!
//! Where the catalog and the inventory file come from.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line flags (highest priority)                              │
//! │     --inventory ./inv.json                                             │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     ELIXIR_INVENTORY_PATH=/data/inventory.json                         │
//! │     ELIXIR_TYPES=CD,ATK,HP                                             │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/elixir-tracker/elixir.toml (Linux)                       │
//! │     ~/Library/Application Support/com.elixir.tracker/elixir.toml       │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     Standard eleven tiers, five types                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # elixir.toml
//! [inventory]
//! path = "/home/me/elixirs.json"
//!
//! [catalog]
//! types = ["CD", "ATK", "TD", "SD", "HP"]
//!
//! [[catalog.tiers]]
//! name = "Common"
//! ref_points = 1
//! order = 0
//!
//! [[catalog.tiers]]
//! name = "Good"
//! ref_points = 2
//! order = 1
//! ```
//!
//! The catalog is read once at startup and never changes afterwards.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use elixir_core::{Catalog, ElixirType, Tier};

use crate::error::{AppError, AppResult};

/// Config file name inside the platform config directory.
const CONFIG_FILE_NAME: &str = "elixir.toml";

/// Inventory file name inside the platform data directory.
const INVENTORY_FILE_NAME: &str = "inventory.json";

// =============================================================================
// Catalog Settings
// =============================================================================

/// Tier and type tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Quality tiers (name, ref_points, order).
    #[serde(default = "default_tiers")]
    pub tiers: Vec<Tier>,

    /// Elixir type names, in display order.
    #[serde(default = "default_types")]
    pub types: Vec<String>,
}

fn default_tiers() -> Vec<Tier> {
    Catalog::standard().tiers().to_vec()
}

fn default_types() -> Vec<String> {
    Catalog::standard().type_names().map(str::to_string).collect()
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            tiers: default_tiers(),
            types: default_types(),
        }
    }
}

// =============================================================================
// Inventory Settings
// =============================================================================

/// Where the inventory document lives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventorySettings {
    /// Path to the inventory JSON file.
    /// Defaults to `inventory.json` in the platform data directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub inventory: InventorySettings,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (elixir.toml)
    /// 3. Environment variables
    ///
    /// An explicit `config_path` that does not exist is an error; a missing
    /// default config file is not.
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let mut config = match config_path {
            Some(path) if !path.exists() => return Err(AppError::ConfigNotFound(path)),
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document.
    pub fn from_toml_str(contents: &str) -> AppResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    fn from_file(path: &PathBuf) -> AppResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Validates the configuration by building the catalog.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(path) = &self.inventory.path {
            if path.as_os_str().is_empty() {
                return Err(AppError::InvalidConfig(
                    "inventory.path must not be empty".into(),
                ));
            }
        }

        self.catalog().map(|_| ())
    }

    /// Builds the validated catalog.
    pub fn catalog(&self) -> AppResult<Catalog> {
        let types = self
            .catalog
            .types
            .iter()
            .cloned()
            .map(ElixirType::new)
            .collect();
        Ok(Catalog::new(self.catalog.tiers.clone(), types)?)
    }

    /// Resolved inventory path: configured, else the platform data directory.
    pub fn inventory_path(&self) -> AppResult<PathBuf> {
        self.inventory
            .path
            .clone()
            .or_else(Self::default_inventory_path)
            .ok_or(AppError::NoInventoryPath)
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup (environment in production).
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("ELIXIR_INVENTORY_PATH") {
            debug!(path = %path, "Overriding inventory path from environment");
            self.inventory.path = Some(PathBuf::from(path));
        }

        if let Some(types) = lookup("ELIXIR_TYPES") {
            let types: Vec<String> = types
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
            if types.is_empty() {
                warn!("ELIXIR_TYPES is set but lists no types, ignoring");
            } else {
                debug!(?types, "Overriding elixir types from environment");
                self.catalog.types = types;
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Returns the default inventory file path.
    fn default_inventory_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join(INVENTORY_FILE_NAME))
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "elixir", "tracker")
    }
}
