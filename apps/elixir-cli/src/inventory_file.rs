//! Reading the inventory document from disk.
//!
//! The file is the plain JSON shape of [`Inventory`]. A missing file means
//! the user owns nothing yet.

use std::path::Path;
use tracing::{debug, info, warn};

use elixir_core::{Catalog, Inventory};

use crate::error::{AppError, AppResult};

/// Loads the inventory at `path`, or an all-zero one if the file is absent.
pub fn load_inventory(path: &Path, catalog: &Catalog) -> AppResult<Inventory> {
    if !path.exists() {
        info!(?path, "Inventory file not found, starting empty");
        return Ok(Inventory::empty_for(catalog));
    }

    let contents = std::fs::read_to_string(path).map_err(|e| AppError::InventoryReadFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let inventory = Inventory::from_json(&contents).map_err(|e| AppError::InventoryReadFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    for (elixir_type, tier) in inventory.unknown_entries(catalog) {
        warn!(%elixir_type, %tier, "Ignoring inventory entry not in catalog");
    }
    if inventory.is_empty() {
        info!(?path, "Inventory holds no elixirs");
    } else {
        debug!(?path, "Inventory loaded");
    }

    Ok(inventory)
}
