//! # Target Selector
//!
//! Picks elixirs from the inventory whose point total reaches a target,
//! overshooting as little as the greedy walk allows.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  select(catalog, inventory, target = 7, types = {CD})                   │
//! │                                                                         │
//! │  1. Candidates (owned > 0, selected types only)                        │
//! │       CD/Common  1 pt × 2                                              │
//! │       CD/Rare    4 pts × 1                                             │
//! │       CD/Good    2 pts × 3                                             │
//! │                                                                         │
//! │  2. Available = 2 + 4 + 6 = 12 ≥ 7            (else: Unreachable)      │
//! │                                                                         │
//! │  3. Sort by points, then tier order, then catalog type order            │
//! │       Common(1) → Good(2) → Rare(4)                                    │
//! │                                                                         │
//! │  4. Walk, taking min(ceil(needed / pts), owned)                        │
//! │       Common: need 7, take min(7, 2) = 2   achieved 2                  │
//! │       Good:   need 5, take min(3, 3) = 3   achieved 8                  │
//! │       Rare:   achieved ≥ target, stop                                  │
//! │                                                                         │
//! │  5. 8 > 7 → OverTarget { overshoot: 1 }                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The walk is a heuristic. It spends cheap elixirs first and keeps each
//! step's overshoot small, but it does not search for the globally smallest
//! overshoot: with Good(2) × 2 and Sturdy(3) × 1 and a target of 3 it takes
//! both Goods (4) instead of the single Sturdy (3).
//!
//! ## Properties
//! - Pure: no I/O, no hidden state, same input → same output
//! - Never fails: bad input is reported through [`SelectionStatus`]
//! - The order of `selected_types` does not matter

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use ts_rs::TS;

use crate::catalog::{Catalog, Tier};
use crate::inventory::Inventory;
use crate::points::RefPoints;
use crate::validation::parse_target_input;

// =============================================================================
// Selection Status
// =============================================================================

/// Outcome of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum SelectionStatus {
    /// Nothing computed yet.
    #[default]
    Unset,

    /// Target was empty, non-numeric, zero or negative.
    InvalidTarget,

    /// No elixir type was selected.
    NoTypesSelected,

    /// Selected types hold fewer points than the target.
    Unreachable { max_achievable: RefPoints },

    /// Achieved exactly the target.
    ExactMatch,

    /// Achieved more than the target (the closest the walk could get).
    OverTarget { overshoot: RefPoints },
}

impl SelectionStatus {
    /// True for `ExactMatch` and `OverTarget`.
    pub fn is_reached(&self) -> bool {
        matches!(
            self,
            SelectionStatus::ExactMatch | SelectionStatus::OverTarget { .. }
        )
    }
}

// =============================================================================
// Selection Result
// =============================================================================

/// What to use, what it adds up to, and how that compares to the target.
///
/// ## Invariants
/// - `achieved` = Σ quantity × tier points over `elixirs`
/// - Every quantity is positive and ≤ the owned quantity
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SelectionResult {
    /// Requested target (0 when the target was invalid).
    pub target: RefPoints,

    /// Elixirs to use: type → tier → quantity.
    #[ts(type = "Record<string, Record<string, number>>")]
    pub elixirs: BTreeMap<String, BTreeMap<String, u64>>,

    /// Sum of the points of every elixir in `elixirs`.
    pub achieved: RefPoints,

    pub status: SelectionStatus,
}

impl SelectionResult {
    fn rejected(status: SelectionStatus) -> Self {
        SelectionResult {
            status,
            ..Self::default()
        }
    }

    /// Quantity of one (type, tier) in the selection (0 when not picked).
    pub fn quantity(&self, elixir_type: &str, tier: &str) -> u64 {
        self.elixirs
            .get(elixir_type)
            .and_then(|tiers| tiers.get(tier))
            .copied()
            .unwrap_or(0)
    }

    /// True when nothing was picked.
    pub fn is_empty(&self) -> bool {
        self.elixirs.is_empty()
    }

    /// Number of elixirs picked across all entries.
    pub fn item_count(&self) -> u64 {
        self.elixirs
            .values()
            .flat_map(|tiers| tiers.values())
            .sum()
    }

    /// User-facing status line.
    ///
    /// ## Example
    /// ```rust
    /// use elixir_core::{select, Catalog, Inventory};
    ///
    /// let catalog = Catalog::standard();
    /// let mut inventory = Inventory::new();
    /// inventory.set_quantity(&catalog, "ATK", "Common", 5).unwrap();
    ///
    /// let result = select(&catalog, &inventory, 3, &["ATK"]);
    /// assert_eq!(
    ///     result.message(),
    ///     "Successfully achieved exactly 3 reference points."
    /// );
    /// ```
    pub fn message(&self) -> String {
        match self.status {
            SelectionStatus::Unset => String::new(),
            SelectionStatus::InvalidTarget => {
                "Please enter a valid positive target reference point.".to_string()
            }
            SelectionStatus::NoTypesSelected => {
                "Please select at least one elixir type for the calculation.".to_string()
            }
            SelectionStatus::Unreachable { max_achievable } if self.is_empty() => format!(
                "Target ({}) cannot be reached with the selected elixir types. Max achievable: {}.",
                self.target, max_achievable
            ),
            SelectionStatus::Unreachable { max_achievable } => format!(
                "Could not reach target. Achieved {} points. Max possible with selected types: {}.",
                self.achieved, max_achievable
            ),
            SelectionStatus::ExactMatch => format!(
                "Successfully achieved exactly {} reference points.",
                self.achieved
            ),
            SelectionStatus::OverTarget { .. } => format!(
                "Achieved {} reference points (Target: {}). This is the closest value higher than your target.",
                self.achieved, self.target
            ),
        }
    }
}

// =============================================================================
// Candidates
// =============================================================================

/// An owned (type, tier) pair eligible for the walk.
#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    elixir_type: &'a str,
    /// Position of the type in the catalog; breaks ties between types.
    type_rank: usize,
    tier: &'a Tier,
    owned: u64,
}

impl Candidate<'_> {
    fn value(&self) -> RefPoints {
        self.tier.ref_points.saturating_mul(self.owned)
    }
}

/// Collects candidates in walk order: points, then tier order, then the
/// type's catalog position.
///
/// Types are taken from the catalog, so selected names the catalog does not
/// know contribute nothing.
fn candidates<'a>(
    catalog: &'a Catalog,
    inventory: &Inventory,
    selected: &BTreeSet<&str>,
) -> Vec<Candidate<'a>> {
    let mut list: Vec<Candidate<'a>> = catalog
        .type_names()
        .enumerate()
        .filter(|(_, elixir_type)| selected.contains(elixir_type))
        .flat_map(|(type_rank, elixir_type)| {
            catalog.tiers().iter().filter_map(move |tier| {
                let owned = inventory.quantity(elixir_type, &tier.name);
                (owned > 0).then_some(Candidate {
                    elixir_type,
                    type_rank,
                    tier,
                    owned,
                })
            })
        })
        .collect();

    list.sort_by(|a, b| {
        a.tier
            .ref_points
            .cmp(&b.tier.ref_points)
            .then(a.tier.order.cmp(&b.tier.order))
            .then(a.type_rank.cmp(&b.type_rank))
    });
    list
}

// =============================================================================
// Selection
// =============================================================================

/// Selects elixirs reaching `target` from the `selected_types`.
///
/// A target ≤ 0 yields `InvalidTarget`; an empty type list yields
/// `NoTypesSelected`. Both return an empty selection with 0 achieved.
///
/// ## Example
/// ```rust
/// use elixir_core::{select, Catalog, Inventory, SelectionStatus};
///
/// let catalog = Catalog::standard();
/// let mut inventory = Inventory::new();
/// inventory.set_quantity(&catalog, "CD", "Common", 1).unwrap();
/// inventory.set_quantity(&catalog, "CD", "Good", 1).unwrap();
///
/// let result = select(&catalog, &inventory, 3, &["CD"]);
/// assert_eq!(result.status, SelectionStatus::ExactMatch);
/// assert_eq!(result.quantity("CD", "Common"), 1);
/// assert_eq!(result.quantity("CD", "Good"), 1);
/// ```
pub fn select<S: AsRef<str>>(
    catalog: &Catalog,
    inventory: &Inventory,
    target: i64,
    selected_types: &[S],
) -> SelectionResult {
    match u64::try_from(target) {
        Ok(points) if points > 0 => {
            select_points(catalog, inventory, RefPoints::new(points), selected_types)
        }
        _ => SelectionResult::rejected(SelectionStatus::InvalidTarget),
    }
}

/// Like [`select`], but takes the target as typed by the user.
///
/// Empty or non-numeric text is reported as `InvalidTarget`.
pub fn select_from_input<S: AsRef<str>>(
    catalog: &Catalog,
    inventory: &Inventory,
    raw_target: &str,
    selected_types: &[S],
) -> SelectionResult {
    match parse_target_input(raw_target) {
        Ok(points) => select_points(catalog, inventory, RefPoints::new(points), selected_types),
        Err(_) => SelectionResult::rejected(SelectionStatus::InvalidTarget),
    }
}

/// Greedy walk for an already validated, positive target.
fn select_points<S: AsRef<str>>(
    catalog: &Catalog,
    inventory: &Inventory,
    target: RefPoints,
    selected_types: &[S],
) -> SelectionResult {
    if target.is_zero() {
        return SelectionResult::rejected(SelectionStatus::InvalidTarget);
    }

    let selected: BTreeSet<&str> = selected_types.iter().map(AsRef::as_ref).collect();
    if selected.is_empty() {
        return SelectionResult::rejected(SelectionStatus::NoTypesSelected);
    }

    let candidates = candidates(catalog, inventory, &selected);
    let available: RefPoints = candidates.iter().map(Candidate::value).sum();

    if available < target {
        return SelectionResult {
            target,
            status: SelectionStatus::Unreachable {
                max_achievable: available,
            },
            ..SelectionResult::default()
        };
    }

    let mut achieved = RefPoints::zero();
    let mut elixirs: BTreeMap<String, BTreeMap<String, u64>> = BTreeMap::new();

    for candidate in &candidates {
        if achieved >= target {
            break;
        }

        let needed = target.saturating_sub(achieved);
        let count = candidate
            .tier
            .ref_points
            .units_to_cover(needed)
            .min(candidate.owned);

        if count > 0 {
            *elixirs
                .entry(candidate.elixir_type.to_string())
                .or_default()
                .entry(candidate.tier.name.clone())
                .or_insert(0) += count;
            achieved = achieved.saturating_add(candidate.tier.ref_points.saturating_mul(count));
        }
    }

    let status = if achieved == target {
        SelectionStatus::ExactMatch
    } else if achieved > target {
        SelectionStatus::OverTarget {
            overshoot: achieved.saturating_sub(target),
        }
    } else {
        SelectionStatus::Unreachable {
            max_achievable: available,
        }
    };

    SelectionResult {
        target,
        elixirs,
        achieved,
        status,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ElixirType;

    fn inventory(entries: &[(&str, &str, u64)]) -> Inventory {
        let catalog = Catalog::standard();
        let mut inv = Inventory::new();
        for &(elixir_type, tier, qty) in entries {
            inv.set_quantity(&catalog, elixir_type, tier, qty).unwrap();
        }
        inv
    }

    #[test]
    fn test_exact_match_single_tier() {
        let catalog = Catalog::standard();
        let inv = inventory(&[("ATK", "Common", 5)]);

        let result = select(&catalog, &inv, 3, &["ATK"]);

        assert_eq!(result.status, SelectionStatus::ExactMatch);
        assert_eq!(result.achieved.value(), 3);
        assert_eq!(result.quantity("ATK", "Common"), 3);
        assert_eq!(result.elixirs.len(), 1);
    }

    #[test]
    fn test_unreachable_returns_empty_selection() {
        let catalog = Catalog::standard();
        let inv = inventory(&[("ATK", "Common", 2)]);

        let result = select(&catalog, &inv, 3, &["ATK"]);

        assert_eq!(
            result.status,
            SelectionStatus::Unreachable {
                max_achievable: RefPoints::new(2)
            }
        );
        assert!(result.is_empty());
        assert!(result.achieved.is_zero());
        assert_eq!(
            result.message(),
            "Target (3) cannot be reached with the selected elixir types. Max achievable: 2."
        );
    }

    #[test]
    fn test_takes_cheap_tier_before_expensive() {
        let catalog = Catalog::standard();
        let inv = inventory(&[("CD", "Common", 1), ("CD", "Good", 1)]);

        let result = select(&catalog, &inv, 3, &["CD"]);

        assert_eq!(result.status, SelectionStatus::ExactMatch);
        assert_eq!(result.quantity("CD", "Common"), 1);
        assert_eq!(result.quantity("CD", "Good"), 1);
        assert_eq!(result.achieved.value(), 3);
    }

    #[test]
    fn test_invalid_target() {
        let catalog = Catalog::standard();
        let inv = inventory(&[("ATK", "Common", 5)]);

        for target in [0, -1, i64::MIN] {
            let result = select(&catalog, &inv, target, &["ATK"]);
            assert_eq!(result.status, SelectionStatus::InvalidTarget);
            assert!(result.is_empty());
            assert!(result.achieved.is_zero());
        }

        for raw in ["", "  ", "abc", "0", "-4", "2.5"] {
            let result = select_from_input(&catalog, &inv, raw, &["ATK"]);
            assert_eq!(result.status, SelectionStatus::InvalidTarget, "input {raw:?}");
            assert!(result.is_empty());
        }
    }

    #[test]
    fn test_no_types_selected() {
        let catalog = Catalog::standard();
        let inv = inventory(&[("ATK", "Common", 5)]);
        let none: [&str; 0] = [];

        let result = select(&catalog, &inv, 3, &none);

        assert_eq!(result.status, SelectionStatus::NoTypesSelected);
        assert!(result.is_empty());
        assert!(result.achieved.is_zero());
    }

    #[test]
    fn test_invalid_target_checked_before_types() {
        let catalog = Catalog::standard();
        let none: [&str; 0] = [];
        let result = select(&catalog, &Inventory::new(), 0, &none);
        assert_eq!(result.status, SelectionStatus::InvalidTarget);
    }

    #[test]
    fn test_over_target_takes_ceiling() {
        let catalog = Catalog::standard();
        // Only Epic (8 pts) available: target 10 needs ceil(10/8) = 2
        let inv = inventory(&[("HP", "Epic", 5)]);

        let result = select(&catalog, &inv, 10, &["HP"]);

        assert_eq!(result.quantity("HP", "Epic"), 2);
        assert_eq!(result.achieved.value(), 16);
        assert_eq!(
            result.status,
            SelectionStatus::OverTarget {
                overshoot: RefPoints::new(6)
            }
        );
        assert_eq!(
            result.message(),
            "Achieved 16 reference points (Target: 10). This is the closest value higher than your target."
        );
    }

    #[test]
    fn test_walk_example_from_module_docs() {
        let catalog = Catalog::standard();
        let inv = inventory(&[("CD", "Common", 2), ("CD", "Rare", 1), ("CD", "Good", 3)]);

        let result = select(&catalog, &inv, 7, &["CD"]);

        assert_eq!(result.quantity("CD", "Common"), 2);
        assert_eq!(result.quantity("CD", "Good"), 3);
        assert_eq!(result.quantity("CD", "Rare"), 0);
        assert_eq!(result.achieved.value(), 8);
    }

    #[test]
    fn test_greedy_is_not_globally_optimal() {
        let catalog = Catalog::standard();
        let inv = inventory(&[("TD", "Good", 2), ("TD", "Sturdy", 1)]);

        let result = select(&catalog, &inv, 3, &["TD"]);

        // The single Sturdy would be exact; the walk spends both Goods.
        assert_eq!(result.quantity("TD", "Good"), 2);
        assert_eq!(result.quantity("TD", "Sturdy"), 0);
        assert_eq!(result.achieved.value(), 4);
    }

    #[test]
    fn test_unselected_types_are_ignored() {
        let catalog = Catalog::standard();
        let inv = inventory(&[("ATK", "Common", 1), ("HP", "Eternal", 10)]);

        let result = select(&catalog, &inv, 5, &["ATK"]);

        assert_eq!(
            result.status,
            SelectionStatus::Unreachable {
                max_achievable: RefPoints::new(1)
            }
        );
    }

    #[test]
    fn test_unknown_selected_type_contributes_nothing() {
        let catalog = Catalog::standard();
        let inv = inventory(&[("ATK", "Common", 3)]);

        let result = select(&catalog, &inv, 3, &["ATK", "XP"]);

        assert_eq!(result.status, SelectionStatus::ExactMatch);
    }

    #[test]
    fn test_same_tier_across_types_is_deterministic() {
        let catalog = Catalog::standard();
        let inv = inventory(&[("ATK", "Rare", 1), ("CD", "Rare", 1), ("SD", "Rare", 1)]);

        let a = select(&catalog, &inv, 6, &["SD", "CD", "ATK"]);
        let b = select(&catalog, &inv, 6, &["ATK", "SD", "CD", "ATK"]);

        assert_eq!(a, b);
        // Ties on points and tier order follow catalog type order: CD, ATK, TD, SD, HP
        assert_eq!(a.quantity("CD", "Rare"), 1);
        assert_eq!(a.quantity("ATK", "Rare"), 1);
        assert_eq!(a.quantity("SD", "Rare"), 0);
    }

    #[test]
    fn test_tie_prefers_earlier_catalog_type() {
        let catalog = Catalog::standard();
        let inv = inventory(&[("CD", "Rare", 1), ("ATK", "Rare", 1)]);
        let all: Vec<&str> = catalog.type_names().collect();

        let result = select(&catalog, &inv, 4, &all);

        assert_eq!(result.status, SelectionStatus::ExactMatch);
        assert_eq!(result.quantity("CD", "Rare"), 1);
        assert_eq!(result.quantity("ATK", "Rare"), 0);
    }

    #[test]
    fn test_tie_follows_custom_catalog_order() {
        let catalog = Catalog::new(
            vec![Tier::new("Small", 5, 0)],
            vec![ElixirType::new("Zeal"), ElixirType::new("Aura")],
        )
        .unwrap();
        let mut inv = Inventory::new();
        inv.set_quantity(&catalog, "Aura", "Small", 1).unwrap();
        inv.set_quantity(&catalog, "Zeal", "Small", 1).unwrap();

        let result = select(&catalog, &inv, 5, &["Aura", "Zeal"]);

        assert_eq!(result.quantity("Zeal", "Small"), 1);
        assert_eq!(result.quantity("Aura", "Small"), 0);
    }

    #[test]
    fn test_selected_type_outside_catalog_is_not_a_candidate() {
        let catalog = Catalog::standard();
        let inv = Inventory::from_json(r#"{"XP": {"Common": 10}}"#).unwrap();

        let result = select(&catalog, &inv, 3, &["XP"]);

        assert_eq!(
            result.status,
            SelectionStatus::Unreachable {
                max_achievable: RefPoints::zero()
            }
        );
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = Catalog::new(
            vec![Tier::new("Small", 5, 0), Tier::new("Big", 50, 1)],
            vec![ElixirType::new("Mana")],
        )
        .unwrap();
        let mut inv = Inventory::new();
        inv.set_quantity(&catalog, "Mana", "Small", 3).unwrap();
        inv.set_quantity(&catalog, "Mana", "Big", 2).unwrap();

        let result = select(&catalog, &inv, 60, &["Mana"]);

        // 3 × Small = 15, need 45 more → ceil(45/50) = 1 Big
        assert_eq!(result.quantity("Mana", "Small"), 3);
        assert_eq!(result.quantity("Mana", "Big"), 1);
        assert_eq!(result.achieved.value(), 65);
    }

    #[test]
    fn test_huge_quantities_do_not_overflow() {
        let catalog = Catalog::standard();
        let inv = inventory(&[("HP", "Eternal", u64::MAX), ("HP", "Myth", u64::MAX)]);

        let result = select(&catalog, &inv, i64::MAX, &["HP"]);

        assert!(result.status.is_reached());
        assert!(result.achieved >= result.target);
    }

    #[test]
    fn test_unset_result() {
        let result = SelectionResult::default();
        assert_eq!(result.status, SelectionStatus::Unset);
        assert_eq!(result.message(), "");
        assert_eq!(result.item_count(), 0);
    }

    #[test]
    fn test_partial_walk_message() {
        let result = SelectionResult {
            target: RefPoints::new(10),
            elixirs: BTreeMap::from([(
                "CD".to_string(),
                BTreeMap::from([("Common".to_string(), 4)]),
            )]),
            achieved: RefPoints::new(4),
            status: SelectionStatus::Unreachable {
                max_achievable: RefPoints::new(4),
            },
        };
        assert_eq!(
            result.message(),
            "Could not reach target. Achieved 4 points. Max possible with selected types: 4."
        );
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_value(SelectionStatus::OverTarget {
            overshoot: RefPoints::new(3),
        })
        .unwrap();
        assert_eq!(json["kind"], "over_target");
        assert_eq!(json["overshoot"], 3);

        let json = serde_json::to_value(SelectionStatus::ExactMatch).unwrap();
        assert_eq!(json["kind"], "exact_match");
    }
}
