//! # Reports
//!
//! Renders selections, totals and the catalog for stdout.
//!
//! ## Selection (text)
//! ```text
//! Achieved 8 reference points (Target: 7). This is the closest value ...
//!
//! Elixirs to Use:
//! CD
//!   Common: 2 pcs
//!   Good: 3 pcs
//!
//! Achieved Ref Points: 8
//! ```
//!
//! Types follow catalog order and tiers follow tier order, whatever order the
//! selection map holds them in. Counts and points group thousands.
//!
//! JSON output is the serialized core type plus the status message.

use serde::Serialize;
use std::fmt::Write;

use elixir_core::points::group_thousands;
use elixir_core::{Catalog, InventorySummary, SelectionResult};

use crate::cli::OutputFormat;
use crate::error::AppResult;

/// JSON shape of a selection: the result plus its user-facing message.
#[derive(Debug, Serialize)]
struct SelectionReport<'a> {
    #[serde(flatten)]
    result: &'a SelectionResult,
    message: String,
}

/// Renders a selection result.
pub fn render_selection(
    catalog: &Catalog,
    result: &SelectionResult,
    format: OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&SelectionReport {
            result,
            message: result.message(),
        })?),
        OutputFormat::Text => Ok(selection_text(catalog, result)),
    }
}

fn selection_text(catalog: &Catalog, result: &SelectionResult) -> String {
    let mut out = result.message();

    if !result.is_empty() {
        out.push_str("\n\nElixirs to Use:\n");
        for elixir_type in catalog.type_names() {
            let Some(tiers) = result.elixirs.get(elixir_type) else {
                continue;
            };
            if tiers.values().all(|&q| q == 0) {
                continue;
            }

            let _ = writeln!(out, "{elixir_type}");
            for tier in catalog.tiers() {
                let quantity = result.quantity(elixir_type, &tier.name);
                if quantity > 0 {
                    let _ = writeln!(out, "  {}: {} pcs", tier.name, group_thousands(quantity));
                }
            }
        }
        let _ = write!(out, "\nAchieved Ref Points: {}", result.achieved);
    }

    out
}

/// Renders per-type and overall totals.
pub fn render_summary(summary: &InventorySummary, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
        OutputFormat::Text => {
            let width = summary
                .per_type
                .iter()
                .map(|t| t.elixir_type.len())
                .max()
                .unwrap_or(0);

            let mut out = String::new();
            for entry in &summary.per_type {
                let _ = writeln!(
                    out,
                    "{:<width$}  {} Ref Points",
                    entry.elixir_type, entry.total
                );
            }
            let _ = write!(out, "Overall Total Reference Points: {}", summary.overall);
            Ok(out)
        }
    }
}

/// Renders the tier table and type list.
pub fn render_catalog(catalog: &Catalog) -> String {
    let width = catalog
        .tiers()
        .iter()
        .map(|t| t.name.len())
        .max()
        .unwrap_or(0);

    let mut out = String::from("Tiers:\n");
    for tier in catalog.tiers() {
        let _ = writeln!(out, "  {:<width$}  {}", tier.name, tier.ref_points);
    }
    let types: Vec<&str> = catalog.type_names().collect();
    let _ = write!(out, "Types: {}", types.join(", "));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use elixir_core::{select, Inventory};

    fn inventory(entries: &[(&str, &str, u64)]) -> Inventory {
        let catalog = Catalog::standard();
        let mut inv = Inventory::new();
        for &(t, tier, q) in entries {
            inv.set_quantity(&catalog, t, tier, q).unwrap();
        }
        inv
    }

    #[test]
    fn test_selection_text_follows_catalog_order() {
        let catalog = Catalog::standard();
        let inv = inventory(&[("HP", "Common", 1), ("CD", "Good", 1)]);
        let result = select(&catalog, &inv, 3, &["HP", "CD"]);

        let text = render_selection(&catalog, &result, OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "Successfully achieved exactly 3 reference points.\n\n\
             Elixirs to Use:\n\
             CD\n  Good: 1 pcs\n\
             HP\n  Common: 1 pcs\n\
             \nAchieved Ref Points: 3"
        );
    }

    #[test]
    fn test_selection_text_without_picks_is_message_only() {
        let catalog = Catalog::standard();
        let inv = inventory(&[("CD", "Eternal", 1)]);
        let result = select(&catalog, &inv, 1000, &["CD"]);

        let text = render_selection(&catalog, &result, OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "Target (1,000) cannot be reached with the selected elixir types. Max achievable: 28."
        );
    }

    #[test]
    fn test_selection_json_includes_message() {
        let catalog = Catalog::standard();
        let inv = inventory(&[("ATK", "Rare", 3)]);
        let result = select(&catalog, &inv, 10, &["ATK"]);

        let json = render_selection(&catalog, &result, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["target"], 10);
        assert_eq!(value["achieved"], 12);
        assert_eq!(value["elixirs"]["ATK"]["Rare"], 3);
        assert_eq!(value["status"]["kind"], "over_target");
        assert_eq!(value["status"]["overshoot"], 2);
        assert!(value["message"].as_str().unwrap().starts_with("Achieved 12"));
    }

    #[test]
    fn test_summary_text() {
        let catalog = Catalog::standard();
        let inv = inventory(&[("CD", "Myth", 100), ("ATK", "Common", 1)]);
        let text = render_summary(&inv.summary(&catalog), OutputFormat::Text).unwrap();

        assert!(text.starts_with("CD   2,000 Ref Points\nATK  1 Ref Points\n"));
        assert!(text.ends_with("Overall Total Reference Points: 2,001"));
    }

    #[test]
    fn test_summary_json() {
        let catalog = Catalog::standard();
        let inv = inventory(&[("SD", "Epic", 2)]);
        let json = render_summary(&inv.summary(&catalog), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["overall"], 16);
        assert_eq!(value["per_type"][3]["elixir_type"], "SD");
    }

    #[test]
    fn test_catalog_listing() {
        let text = render_catalog(&Catalog::standard());
        assert!(text.starts_with("Tiers:\n  Common     1\n"));
        assert!(text.contains("  Eternal    28\n"));
        assert!(text.ends_with("Types: CD, ATK, TD, SD, HP"));
    }
}
