//! # Inventory
//!
//! How many elixirs of each (type, tier) the user owns, and the point totals
//! derived from those counts.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Inventory                                                              │
//! │                                                                         │
//! │  {                                                                      │
//! │    "CD":  { "Common": 5, "Good": 0, "Myth": 2 },                        │
//! │    "ATK": { "Epic": 1 },                                                │
//! │    ...                                                                  │
//! │  }                                                                      │
//! │                                                                         │
//! │  Missing type or tier  → quantity 0                                    │
//! │  "" as a quantity      → 0 (a cleared input field)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The inventory is owned by the caller. The selector only ever reads it.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::points::RefPoints;
use crate::validation::parse_quantity_input;

type QuantityTable = BTreeMap<String, BTreeMap<String, u64>>;

// =============================================================================
// Inventory
// =============================================================================

/// Owned quantities keyed by elixir type, then tier name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct Inventory(#[ts(type = "Record<string, Record<string, number>>")] QuantityTable);

impl Inventory {
    /// Creates an inventory with no entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an inventory with an explicit zero for every catalog
    /// (type, tier) pair.
    pub fn empty_for(catalog: &Catalog) -> Self {
        let table = catalog
            .type_names()
            .map(|type_name| {
                let tiers = catalog
                    .tiers()
                    .iter()
                    .map(|tier| (tier.name.clone(), 0))
                    .collect();
                (type_name.to_string(), tiers)
            })
            .collect();
        Inventory(table)
    }

    /// Decodes an inventory document.
    ///
    /// Quantities may be numbers or digit strings; an empty string reads
    /// as 0.
    ///
    /// ## Example
    /// ```rust
    /// use elixir_core::inventory::Inventory;
    ///
    /// let inv = Inventory::from_json(r#"{"CD": {"Common": 3, "Good": ""}}"#).unwrap();
    /// assert_eq!(inv.quantity("CD", "Common"), 3);
    /// assert_eq!(inv.quantity("CD", "Good"), 0);
    /// assert_eq!(inv.quantity("HP", "Common"), 0);
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::InvalidInventory(e.to_string()))
    }

    /// Quantity owned (0 when absent).
    pub fn quantity(&self, elixir_type: &str, tier: &str) -> u64 {
        self.0
            .get(elixir_type)
            .and_then(|tiers| tiers.get(tier))
            .copied()
            .unwrap_or(0)
    }

    /// Sets the owned quantity for a catalog (type, tier) pair.
    ///
    /// ## Errors
    /// - `UnknownElixirType` / `UnknownTier` when the name is not in the
    ///   catalog
    pub fn set_quantity(
        &mut self,
        catalog: &Catalog,
        elixir_type: &str,
        tier: &str,
        quantity: u64,
    ) -> CoreResult<()> {
        if catalog.elixir_type(elixir_type).is_none() {
            return Err(CoreError::UnknownElixirType(elixir_type.to_string()));
        }
        if catalog.tier(tier).is_none() {
            return Err(CoreError::UnknownTier(tier.to_string()));
        }

        self.0
            .entry(elixir_type.to_string())
            .or_default()
            .insert(tier.to_string(), quantity);
        Ok(())
    }

    /// Point total for one type, counting catalog tiers only.
    pub fn type_total(&self, catalog: &Catalog, elixir_type: &str) -> RefPoints {
        catalog
            .tiers()
            .iter()
            .map(|tier| {
                tier.ref_points
                    .saturating_mul(self.quantity(elixir_type, &tier.name))
            })
            .sum()
    }

    /// Per-type and overall point totals.
    pub fn summary(&self, catalog: &Catalog) -> InventorySummary {
        let per_type: Vec<TypeTotal> = catalog
            .type_names()
            .map(|name| TypeTotal {
                elixir_type: name.to_string(),
                total: self.type_total(catalog, name),
            })
            .collect();
        let overall = per_type.iter().map(|t| t.total).sum();

        InventorySummary { per_type, overall }
    }

    /// Entries whose type or tier is not in the catalog, as (type, tier).
    ///
    /// These are kept but never counted or selected.
    pub fn unknown_entries(&self, catalog: &Catalog) -> Vec<(String, String)> {
        self.0
            .iter()
            .flat_map(|(elixir_type, tiers)| {
                let known_type = catalog.elixir_type(elixir_type).is_some();
                tiers
                    .keys()
                    .filter(move |tier| !known_type || catalog.tier(tier).is_none())
                    .map(move |tier| (elixir_type.clone(), tier.clone()))
            })
            .collect()
    }

    /// True when no entry has a positive quantity.
    pub fn is_empty(&self) -> bool {
        self.0.values().flat_map(|tiers| tiers.values()).all(|&q| q == 0)
    }
}

/// Accepts both `3` and `"3"` (and `""` for zero) as a quantity.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuantity {
    Count(u64),
    Text(String),
}

impl TryFrom<RawQuantity> for u64 {
    type Error = ValidationError;

    fn try_from(raw: RawQuantity) -> Result<Self, Self::Error> {
        match raw {
            RawQuantity::Count(n) => Ok(n),
            RawQuantity::Text(s) => parse_quantity_input(&s),
        }
    }
}

impl<'de> Deserialize<'de> for Inventory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, BTreeMap<String, RawQuantity>>::deserialize(deserializer)?;

        let mut table = QuantityTable::new();
        for (elixir_type, tiers) in raw {
            let mut parsed = BTreeMap::new();
            for (tier, quantity) in tiers {
                let quantity = u64::try_from(quantity).map_err(|e| {
                    serde::de::Error::custom(format!("{elixir_type}/{tier}: {e}"))
                })?;
                parsed.insert(tier, quantity);
            }
            table.insert(elixir_type, parsed);
        }

        Ok(Inventory(table))
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Point total for one elixir type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TypeTotal {
    pub elixir_type: String,
    pub total: RefPoints,
}

/// Totals shown in the inventory overview, in catalog type order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InventorySummary {
    pub per_type: Vec<TypeTotal>,
    pub overall: RefPoints,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_for_catalog() {
        let catalog = Catalog::standard();
        let inv = Inventory::empty_for(&catalog);
        assert!(inv.is_empty());
        assert_eq!(inv.quantity("HP", "Eternal"), 0);

        let json = serde_json::to_value(&inv).unwrap();
        assert_eq!(json["CD"]["Myth"], 0);
        assert_eq!(json.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_set_quantity() {
        let catalog = Catalog::standard();
        let mut inv = Inventory::new();

        inv.set_quantity(&catalog, "ATK", "Epic", 4).unwrap();
        assert_eq!(inv.quantity("ATK", "Epic"), 4);
        assert!(!inv.is_empty());

        inv.set_quantity(&catalog, "ATK", "Epic", 1).unwrap();
        assert_eq!(inv.quantity("ATK", "Epic"), 1);
    }

    #[test]
    fn test_set_quantity_rejects_unknown_names() {
        let catalog = Catalog::standard();
        let mut inv = Inventory::new();

        assert!(matches!(
            inv.set_quantity(&catalog, "XP", "Epic", 1),
            Err(CoreError::UnknownElixirType(_))
        ));
        assert!(matches!(
            inv.set_quantity(&catalog, "ATK", "Shiny", 1),
            Err(CoreError::UnknownTier(_))
        ));
        assert!(inv.is_empty());
    }

    #[test]
    fn test_from_json_accepts_cleared_fields() {
        let inv = Inventory::from_json(r#"{"SD": {"Common": "", "Good": "7", "Rare": 2}}"#)
            .unwrap();
        assert_eq!(inv.quantity("SD", "Common"), 0);
        assert_eq!(inv.quantity("SD", "Good"), 7);
        assert_eq!(inv.quantity("SD", "Rare"), 2);
    }

    #[test]
    fn test_from_json_rejects_bad_quantities() {
        assert!(matches!(
            Inventory::from_json(r#"{"SD": {"Common": -1}}"#),
            Err(CoreError::InvalidInventory(_))
        ));
        assert!(matches!(
            Inventory::from_json(r#"{"SD": {"Common": "lots"}}"#),
            Err(CoreError::InvalidInventory(_))
        ));
        assert!(Inventory::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_type_total_and_summary() {
        let catalog = Catalog::standard();
        let mut inv = Inventory::new();
        inv.set_quantity(&catalog, "CD", "Common", 5).unwrap(); // 5
        inv.set_quantity(&catalog, "CD", "Myth", 2).unwrap(); // 40
        inv.set_quantity(&catalog, "HP", "Eternal", 1).unwrap(); // 28

        assert_eq!(inv.type_total(&catalog, "CD").value(), 45);

        let summary = inv.summary(&catalog);
        assert_eq!(summary.overall.value(), 73);
        assert_eq!(summary.per_type[4], TypeTotal {
            elixir_type: "HP".to_string(),
            total: RefPoints::new(28),
        });
        assert!(summary.per_type[2].total.is_zero());
        assert_eq!(summary.per_type[0].elixir_type, "CD");
    }

    #[test]
    fn test_unknown_tiers_do_not_count() {
        let catalog = Catalog::standard();
        let inv = Inventory::from_json(r#"{"CD": {"Shiny": 100, "Good": 1}}"#).unwrap();
        assert_eq!(inv.type_total(&catalog, "CD").value(), 2);
    }

    #[test]
    fn test_typescript_binding_is_nested_record() {
        assert_eq!(
            Inventory::inline(),
            "Record<string, Record<string, number>>"
        );
    }

    #[test]
    fn test_unknown_entries() {
        let catalog = Catalog::standard();
        let inv = Inventory::from_json(
            r#"{"CD": {"Shiny": 1, "Good": 1}, "XP": {"Common": 2}, "HP": {"Myth": 0}}"#,
        )
        .unwrap();

        assert_eq!(
            inv.unknown_entries(&catalog),
            vec![
                ("CD".to_string(), "Shiny".to_string()),
                ("XP".to_string(), "Common".to_string()),
            ]
        );
        assert!(Inventory::empty_for(&catalog).unknown_entries(&catalog).is_empty());
    }
}
