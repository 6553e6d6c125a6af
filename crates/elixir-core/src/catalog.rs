//! # Catalog
//!
//! The fixed tables the rest of the crate reads: quality tiers and elixir
//! types.
//!
//! ## Catalog Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Catalog                                       │
//! │                                                                         │
//! │  ┌───────────────────────────┐     ┌──────────────────────────┐        │
//! │  │  Tier (sorted by order)   │     │  ElixirType              │        │
//! │  │  ───────────────────────  │     │  ──────────────────────  │        │
//! │  │  Common      1 pt   #0    │     │  CD                      │        │
//! │  │  Good        2 pts  #1    │     │  ATK                     │        │
//! │  │  ...                      │     │  TD                      │        │
//! │  │  Eternal    28 pts  #10   │     │  SD                      │        │
//! │  └───────────────────────────┘     │  HP                      │        │
//! │                                    └──────────────────────────┘        │
//! │                                                                         │
//! │  Point value is a property of the TIER only: a Rare CD and a Rare HP   │
//! │  are both worth 4 points.                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A catalog is built once at startup and passed by reference into the
//! selector. It is never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::points::RefPoints;
use crate::validation::validate_catalog_name;

/// Built-in tier table: (name, reference points, ordinal rank).
const STANDARD_TIERS: &[(&str, u64, u32)] = &[
    ("Common", 1, 0),
    ("Good", 2, 1),
    ("Sturdy", 3, 2),
    ("Rare", 4, 3),
    ("Perfect", 5, 4),
    ("Scarce", 6, 5),
    ("Epic", 8, 6),
    ("Legendary", 10, 7),
    ("Immortal", 14, 8),
    ("Myth", 20, 9),
    ("Eternal", 28, 10),
];

/// Built-in elixir types.
const STANDARD_TYPES: &[&str] = &["CD", "ATK", "TD", "SD", "HP"];

// =============================================================================
// Tier
// =============================================================================

/// A quality grade and the points one elixir of that grade is worth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Tier {
    /// Unique display name ("Common", "Rare", ...).
    pub name: String,

    /// Points one unit is worth, independent of elixir type.
    pub ref_points: RefPoints,

    /// Rank used as a tie-break; strictly increases with `ref_points`.
    pub order: u32,
}

impl Tier {
    pub fn new(name: impl Into<String>, ref_points: u64, order: u32) -> Self {
        Tier {
            name: name.into(),
            ref_points: RefPoints::new(ref_points),
            order,
        }
    }
}

// =============================================================================
// Elixir Type
// =============================================================================

/// A kind of elixir (the stat it boosts).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ElixirType {
    pub name: String,
}

impl ElixirType {
    pub fn new(name: impl Into<String>) -> Self {
        ElixirType { name: name.into() }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Validated, immutable tier and type tables.
///
/// ## Invariants
/// - At least one tier and one type
/// - Names are unique within each table
/// - Every tier is worth at least 1 point
/// - Sorted by `order`, point values strictly increase along that order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    tiers: Vec<Tier>,
    types: Vec<ElixirType>,
}

impl Catalog {
    /// Builds a catalog, checking every invariant.
    ///
    /// ## Example
    /// ```rust
    /// use elixir_core::catalog::{Catalog, ElixirType, Tier};
    ///
    /// let catalog = Catalog::new(
    ///     vec![Tier::new("Good", 2, 1), Tier::new("Common", 1, 0)],
    ///     vec![ElixirType::new("ATK")],
    /// )
    /// .unwrap();
    ///
    /// // Tiers come back sorted by rank
    /// assert_eq!(catalog.tiers()[0].name, "Common");
    ///
    /// // Same point value on two ranks is rejected
    /// assert!(Catalog::new(
    ///     vec![Tier::new("Common", 1, 0), Tier::new("Good", 1, 1)],
    ///     vec![ElixirType::new("ATK")],
    /// )
    /// .is_err());
    /// ```
    pub fn new(mut tiers: Vec<Tier>, types: Vec<ElixirType>) -> CoreResult<Self> {
        if tiers.is_empty() {
            return Err(CoreError::EmptyCatalog("tiers"));
        }
        if types.is_empty() {
            return Err(CoreError::EmptyCatalog("elixir types"));
        }

        let mut seen = HashSet::new();
        for tier in &tiers {
            validate_catalog_name("tier name", &tier.name)?;
            if !seen.insert(tier.name.as_str()) {
                return Err(CoreError::DuplicateName {
                    kind: "tier",
                    name: tier.name.clone(),
                });
            }
            if tier.ref_points.is_zero() {
                return Err(CoreError::ZeroPointTier(tier.name.clone()));
            }
        }

        let mut seen = HashSet::new();
        for elixir_type in &types {
            validate_catalog_name("elixir type", &elixir_type.name)?;
            if !seen.insert(elixir_type.name.as_str()) {
                return Err(CoreError::DuplicateName {
                    kind: "elixir type",
                    name: elixir_type.name.clone(),
                });
            }
        }

        tiers.sort_by_key(|t| t.order);
        for pair in tiers.windows(2) {
            let (lower, higher) = (&pair[0], &pair[1]);
            if lower.order == higher.order || lower.ref_points >= higher.ref_points {
                return Err(CoreError::TierOrderMismatch {
                    lower: lower.name.clone(),
                    higher: higher.name.clone(),
                });
            }
        }

        Ok(Catalog { tiers, types })
    }

    /// The built-in eleven tiers and five elixir types.
    pub fn standard() -> Self {
        // The constant tables already satisfy every invariant checked in
        // `new`; `test_standard_catalog_is_valid` keeps them honest.
        Catalog {
            tiers: STANDARD_TIERS
                .iter()
                .map(|&(name, points, order)| Tier::new(name, points, order))
                .collect(),
            types: STANDARD_TYPES.iter().copied().map(ElixirType::new).collect(),
        }
    }

    /// Tiers in ascending rank (and therefore ascending value).
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Elixir types in display order.
    pub fn types(&self) -> &[ElixirType] {
        &self.types
    }

    /// Looks up a tier by name.
    pub fn tier(&self, name: &str) -> Option<&Tier> {
        self.tiers.iter().find(|t| t.name == name)
    }

    /// Looks up an elixir type by name.
    pub fn elixir_type(&self, name: &str) -> Option<&ElixirType> {
        self.types.iter().find(|t| t.name == name)
    }

    /// Points for one unit of the named tier (0 if unknown).
    pub fn ref_points_for(&self, tier_name: &str) -> RefPoints {
        self.tier(tier_name)
            .map(|t| t.ref_points)
            .unwrap_or_default()
    }

    /// All type names, in display order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.name.as_str())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::standard()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
