//! # Validation Module
//!
//! Input validation utilities for Elixir Tracker.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Input field (frontend / CLI argument)                         │
//! │  ├── Raw text: "", "12", "12a"                                          │
//! │  └── THIS MODULE: digits only, positive where required                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Catalog / Inventory                                           │
//! │  └── Known tier and type names                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Selector                                                      │
//! │  └── Never fails: bad input becomes a SelectionStatus                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use elixir_core::validation::{parse_quantity_input, parse_target_input};
//!
//! assert_eq!(parse_target_input("5000").unwrap(), 5000);
//! assert!(parse_target_input("").is_err());
//!
//! // An emptied quantity field means zero
//! assert_eq!(parse_quantity_input("").unwrap(), 0);
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted tier or type name.
pub const MAX_NAME_LEN: usize = 32;

// =============================================================================
// Numeric Field Parsers
// =============================================================================

/// Parses the target reference points field.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must not be empty
/// - Digits only (no sign, no decimal point)
/// - Must be positive (> 0)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  User types target: "5000"                                             │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  parse_target_input("5000") ← THIS FUNCTION                            │
/// │       │                                                                 │
/// │       ├── ""?          → Required                                      │
/// │       ├── "12a"?       → InvalidFormat                                 │
/// │       ├── "0"?         → MustBePositive                                │
/// │       ├── too large?   → OutOfRange                                    │
/// │       │                                                                 │
/// │       └── OK(5000) → selector                                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn parse_target_input(raw: &str) -> ValidationResult<u64> {
    let value = parse_digits("target", raw)?.ok_or_else(|| ValidationError::Required {
        field: "target".to_string(),
    })?;

    if value == 0 {
        return Err(ValidationError::MustBePositive {
            field: "target".to_string(),
        });
    }

    Ok(value)
}

/// Parses an inventory quantity field.
///
/// ## Rules
/// - Empty means zero (a cleared field snaps back to 0)
/// - Digits only
///
/// ## Example
/// ```rust
/// use elixir_core::validation::parse_quantity_input;
///
/// assert_eq!(parse_quantity_input("12").unwrap(), 12);
/// assert_eq!(parse_quantity_input("  ").unwrap(), 0);
/// assert!(parse_quantity_input("-3").is_err());
/// ```
pub fn parse_quantity_input(raw: &str) -> ValidationResult<u64> {
    Ok(parse_digits("quantity", raw)?.unwrap_or(0))
}

/// Parses an all-digit string; `None` when empty.
fn parse_digits(field: &str, raw: &str) -> ValidationResult<Option<u64>> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Ok(None);
    }

    if !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must contain only digits".to_string(),
        });
    }

    // All digits, so the only possible failure is overflow
    raw.parse::<u64>()
        .map(Some)
        .map_err(|_| ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: u64::MAX,
        })
}

// =============================================================================
// Catalog Name Validators
// =============================================================================

/// Validates a tier or elixir type name.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - At most 32 characters
pub fn validate_catalog_name(field: &str, name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
