//! # App Error Type
//!
//! Unified error type for the CLI.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  config file ──── toml::de::Error ─────┐                               │
//! │  inventory file ─ io / CoreError ──────┤                               │
//! │  catalog ──────── CoreError ───────────┼──► AppError ──► stderr, exit 1│
//! │  report ───────── serde_json::Error ───┘                               │
//! │                                                                         │
//! │  Selector outcomes (Unreachable, InvalidTarget, ...) are NOT errors:   │
//! │  they are printed as the report and the process exits 0.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use elixir_core::CoreError;
use thiserror::Error;

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum AppError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Configuration values are inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Failed to read or parse the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    // =========================================================================
    // Inventory Errors
    // =========================================================================
    /// No inventory path given and no platform data directory available.
    #[error("No inventory file configured")]
    NoInventoryPath,

    /// Failed to read or decode the inventory file.
    #[error("Failed to read inventory {}: {reason}", .path.display())]
    InventoryReadFailed { path: PathBuf, reason: String },

    // =========================================================================
    // Output Errors
    // =========================================================================
    /// Report serialization failed.
    #[error("Failed to render report: {0}")]
    RenderFailed(String),

    /// Domain error from elixir-core.
    #[error(transparent)]
    Core(#[from] CoreError),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::ConfigLoadFailed(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::RenderFailed(err.to_string())
    }
}

impl AppError {
    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidConfig(_)
                | AppError::ConfigNotFound(_)
                | AppError::ConfigLoadFailed(_)
                | AppError::Core(CoreError::EmptyCatalog(_))
                | AppError::Core(CoreError::DuplicateName { .. })
                | AppError::Core(CoreError::ZeroPointTier(_))
                | AppError::Core(CoreError::TierOrderMismatch { .. })
                | AppError::Core(CoreError::Validation(_))
        )
    }

    /// The single line printed to stderr before exiting.
    pub fn exit_message(&self) -> String {
        if self.is_config_error() {
            format!("Configuration error: {self}")
        } else {
            format!("Error: {self}")
        }
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
