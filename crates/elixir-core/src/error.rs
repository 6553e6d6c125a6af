//! # Error Types
//!
//! Domain-specific error types for elixir-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  elixir-core errors (this file)                                         │
//! │  ├── CoreError        - Catalog and inventory rule violations           │
//! │  └── ValidationError  - Input field validation failures                 │
//! │                                                                         │
//! │  elixir-cli errors (app crate)                                          │
//! │  └── AppError         - Config, file and core failures                  │
//! │                                                                         │
//! │  NOT an error: every selector outcome is a SelectionStatus              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (tier name, type name, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Catalog and inventory errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A catalog needs at least one tier and one elixir type.
    #[error("Catalog has no {0}")]
    EmptyCatalog(&'static str),

    /// Two catalog entries share a name.
    #[error("Duplicate {kind} in catalog: {name}")]
    DuplicateName { kind: &'static str, name: String },

    /// Tier is worth zero points.
    #[error("Tier {0} must be worth at least 1 reference point")]
    ZeroPointTier(String),

    /// Ordinal rank must strictly increase with point value.
    ///
    /// ## When This Occurs
    /// ```text
    /// Rare    (4 pts, order 3)
    /// Perfect (4 pts, order 4)   ← same value, different rank
    ///      │
    ///      ▼
    /// TierOrderMismatch { lower: "Rare", higher: "Perfect" }
    /// ```
    #[error("Tier {higher} must be worth more than {lower}")]
    TierOrderMismatch { lower: String, higher: String },

    /// Tier name not present in the catalog.
    #[error("Unknown tier: {0}")]
    UnknownTier(String),

    /// Elixir type not present in the catalog.
    #[error("Unknown elixir type: {0}")]
    UnknownElixirType(String),

    /// Inventory document could not be decoded.
    #[error("Invalid inventory data: {0}")]
    InvalidInventory(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These mirror the checks done on raw text fields before they reach the
/// selector or the inventory.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: u64, max: u64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. letters in a number field).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
