//! # elixir-core: Pure Business Logic for Elixir Tracker
//!
//! This crate is the **heart** of Elixir Tracker. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Elixir Tracker Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Front end (elixir-cli / web frontend)              │   │
//! │  │    Inventory file ──► Target + types ──► Report                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ elixir-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │ inventory │  │ selector  │  │ validation│  │   │
//! │  │   │   Tier    │  │ Inventory │  │  select   │  │  target   │  │   │
//! │  │   │ElixirType │  │  Summary  │  │  Result   │  │  quantity │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING SETUP • NO GLOBAL STATE • PURE FUNCTIONS  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`points`] - `RefPoints` newtype for point totals
//! - [`catalog`] - Tier and elixir type tables
//! - [`inventory`] - Owned quantities and point totals
//! - [`selector`] - The greedy target selector
//! - [`validation`] - Raw input field parsing
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: File system and network access are FORBIDDEN here
//! 3. **Explicit Catalog**: The tier table is passed in, never read from a global
//! 4. **Outcomes, not Errors**: The selector reports bad input as a status
//!
//! ## Example Usage
//!
//! ```rust
//! use elixir_core::{select, Catalog, Inventory, SelectionStatus};
//!
//! let catalog = Catalog::standard();
//! let mut inventory = Inventory::empty_for(&catalog);
//! inventory.set_quantity(&catalog, "ATK", "Common", 5).unwrap();
//!
//! let result = select(&catalog, &inventory, 3, &["ATK"]);
//!
//! assert_eq!(result.status, SelectionStatus::ExactMatch);
//! assert_eq!(result.quantity("ATK", "Common"), 3);
//! ```
//!
//! Raw text fields are checked with the validation helpers:
//!
//! ```rust
//! use elixir_core::validation::parse_target_input;
//! use elixir_core::{ValidationError, ValidationResult};
//!
//! let parsed: ValidationResult<u64> = parse_target_input("abc");
//! assert!(matches!(parsed, Err(ValidationError::InvalidFormat { .. })));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod inventory;
pub mod points;
pub mod selector;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use elixir_core::Catalog` instead of
// `use elixir_core::catalog::Catalog`

pub use catalog::{Catalog, ElixirType, Tier};
pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::{Inventory, InventorySummary, TypeTotal};
pub use points::RefPoints;
pub use selector::{select, select_from_input, SelectionResult, SelectionStatus};
pub use validation::ValidationResult;
