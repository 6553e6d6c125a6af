//! # Reference Points Module
//!
//! Provides the `RefPoints` type for handling point totals safely.
//!
//! ## Why a Newtype?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THREE KINDS OF INTEGER                                                 │
//! │                                                                         │
//! │  The selector juggles:                                                  │
//! │    • quantities      (how many elixirs)          → u64                  │
//! │    • tier ordinals   (tie-break rank)            → u32                  │
//! │    • point totals    (what the target measures)  → RefPoints            │
//! │                                                                         │
//! │  Mixing the first and last is the classic bug:                          │
//! │    achieved += count            ❌ adds elixirs, not points             │
//! │    achieved += points * count   ✅ the only way RefPoints allows it     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use elixir_core::points::RefPoints;
//!
//! let rare = RefPoints::new(4);
//! let three_rares = rare * 3;
//! assert_eq!(three_rares.value(), 12);
//!
//! // Thousands are grouped for display
//! assert_eq!(RefPoints::new(12_345).to_string(), "12,345");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// RefPoints Type
// =============================================================================

/// A non-negative amount of reference points.
///
/// ## Design Decisions
/// - **u64 (unsigned)**: point totals are never negative; a negative target
///   is rejected before it becomes a `RefPoints`
/// - **Single field tuple struct**: zero-cost abstraction over u64
/// - **Transparent serde**: serializes as a bare number
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct RefPoints(#[ts(type = "number")] u64);

impl RefPoints {
    /// Creates a point amount.
    #[inline]
    pub const fn new(points: u64) -> Self {
        RefPoints(points)
    }

    /// Returns zero points.
    #[inline]
    pub const fn zero() -> Self {
        RefPoints(0)
    }

    /// Returns the raw value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Subtracts, clamping at zero.
    ///
    /// ## Example
    /// ```rust
    /// use elixir_core::points::RefPoints;
    ///
    /// let a = RefPoints::new(5);
    /// assert_eq!(a.saturating_sub(RefPoints::new(3)).value(), 2);
    /// assert_eq!(a.saturating_sub(RefPoints::new(9)).value(), 0);
    /// ```
    #[inline]
    pub const fn saturating_sub(self, other: RefPoints) -> RefPoints {
        RefPoints(self.0.saturating_sub(other.0))
    }

    /// Adds, clamping at `u64::MAX`.
    #[inline]
    pub const fn saturating_add(self, other: RefPoints) -> RefPoints {
        RefPoints(self.0.saturating_add(other.0))
    }

    /// Multiplies by a quantity, clamping at `u64::MAX`.
    ///
    /// Quantities come from user-edited inventory files, so totals use this
    /// rather than `*`.
    #[inline]
    pub const fn saturating_mul(self, qty: u64) -> RefPoints {
        RefPoints(self.0.saturating_mul(qty))
    }

    /// Number of units worth `self` each needed to cover `needed`.
    ///
    /// This is ceiling division: the smallest `n` with `n × self ≥ needed`.
    /// A zero unit value covers nothing and yields 0.
    ///
    /// ## Example
    /// ```rust
    /// use elixir_core::points::RefPoints;
    ///
    /// let good = RefPoints::new(2);
    /// assert_eq!(good.units_to_cover(RefPoints::new(4)), 2);
    /// assert_eq!(good.units_to_cover(RefPoints::new(5)), 3);
    /// assert_eq!(good.units_to_cover(RefPoints::zero()), 0);
    /// ```
    #[inline]
    pub const fn units_to_cover(&self, needed: RefPoints) -> u64 {
        if self.0 == 0 {
            return 0;
        }
        needed.0.div_ceil(self.0)
    }
}

/// Formats a count with comma thousands separators.
///
/// ## Example
/// ```rust
/// use elixir_core::points::group_thousands;
///
/// assert_eq!(group_thousands(1500), "1,500");
/// ```
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Groups thousands with commas, e.g. `1,234,567`.
impl fmt::Display for RefPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&group_thousands(self.0))
    }
}

impl From<u64> for RefPoints {
    fn from(points: u64) -> Self {
        RefPoints(points)
    }
}

/// Saturates at `u64::MAX`, like every other `RefPoints` operation.
impl Add for RefPoints {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

impl AddAssign for RefPoints {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = self.saturating_add(other);
    }
}

/// Multiplication by a quantity (points per unit × units), saturating.
impl Mul<u64> for RefPoints {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u64) -> Self {
        self.saturating_mul(qty)
    }
}

impl Sum for RefPoints {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(RefPoints::zero(), RefPoints::saturating_add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
