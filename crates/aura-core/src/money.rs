//! # Money Module
//!
//! Provides the `Rupees` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! In floating point:   0.1 + 0.2 = 0.30000000000000004   WRONG
//! In whole rupees:     subtotal 200 × 15% = 30           exact
//! ```
//!
//! Agri Aura prices are whole rupees per base unit ("₹48 / 1kg"), so the
//! smallest currency unit IS the rupee; there is no paisa anywhere in the
//! catalog and no fractional amount can ever be produced by the pricing
//! rules (the voucher discount floors).
//!
//! ## Usage
//! ```rust
//! use aura_core::money::Rupees;
//!
//! let price = Rupees::new(48);
//! let line = price * 5;
//! assert_eq!(line.amount(), 240);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

/// A monetary value in whole rupees.
///
/// ## Design Decisions
/// - **i64 (signed)**: intermediate subtraction may dip below zero before
///   clamping; keeping the type signed makes that arithmetic honest
/// - **Single-field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support, serialized as a bare number
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Rupees(i64);

impl Rupees {
    /// Creates a value from whole rupees.
    #[inline]
    pub const fn new(amount: i64) -> Self {
        Rupees(amount)
    }

    /// Returns the amount in whole rupees.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Zero rupees.
    #[inline]
    pub const fn zero() -> Self {
        Rupees(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Computes a percentage discount, flooring toward zero.
    ///
    /// ## Arguments
    /// * `bps` - Discount in basis points (1500 = 15%)
    ///
    /// ## Flooring
    /// Integer division truncates, which for the non-negative subtotals
    /// produced by the cart is exactly `floor(amount × bps / 10000)`.
    /// A discount is therefore never fractional and never exceeds the
    /// amount it is taken from.
    ///
    /// ## Example
    /// ```rust
    /// use aura_core::money::Rupees;
    ///
    /// let subtotal = Rupees::new(200);
    /// assert_eq!(subtotal.discount(1500).amount(), 30); // floor(200 × 0.15)
    /// ```
    pub fn discount(&self, bps: u32) -> Rupees {
        // i128 to keep the intermediate product from overflowing
        let cut = self.0 as i128 * bps as i128 / 10_000;
        Rupees(cut as i64)
    }

    /// Subtracts, clamping the result at zero.
    ///
    /// Used for `total = max(0, subtotal - discount)` so a total can never
    /// be negative no matter what discount is applied.
    #[inline]
    pub fn saturating_sub_floor(&self, other: Rupees) -> Rupees {
        Rupees((self.0 - other.0).max(0))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the amount with the rupee sign.
///
/// This is for logs and debugging; the frontend formats for locale.
impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.0)
    }
}

impl Add for Rupees {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Rupees(self.0 + other.0)
    }
}

impl AddAssign for Rupees {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Rupees {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Rupees(self.0 - other.0)
    }
}

/// Multiplication by a quantity (line totals, bulk display price).
impl Mul<i64> for Rupees {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Rupees(self.0 * qty)
    }
}

impl Sum for Rupees {
    fn sum<I: Iterator<Item = Rupees>>(iter: I) -> Self {
        iter.fold(Rupees::zero(), |acc, r| acc + r)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
