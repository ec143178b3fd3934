//! # Money Module
//!
//! Provides the `Money` type for prices and sale totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:  0.1 + 0.2 = 0.30000000000000004                          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "25.00" is parsed straight into 2500 cents                           │
//! │    2500 cents × 3 = 7500 cents, exactly 75.00                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookstall_core::money::Money;
//!
//! let price = Money::from_cents(2500);
//! assert_eq!(price.checked_mul_quantity(3), Some(Money::from_cents(7500)));
//! assert_eq!(format!("{}", price), "25.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use ts_rs::TS;

/// A monetary value in the smallest currency unit (centavos, cents).
///
/// Display renders the bare amount with two decimals. The currency symbol
/// belongs to the presentation layer's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Multiplies a unit price by a quantity. `None` if the product does not
    /// fit in `i64` cents.
    ///
    /// ## User Workflow
    /// ```text
    /// Book: Nosso Lar 20.00
    /// Quantity: 3
    ///      │
    ///      ▼
    /// checked_mul_quantity(3) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Sale total: 60.00
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(&self, qty: u32) -> Option<Self> {
        match self.0.checked_mul(qty as i64) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().unsigned_abs(), self.minor_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Saturates at the `i64` bounds instead of wrapping.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(2599);
        assert_eq!(money.cents(), 2599);
        assert_eq!(money.major(), 25);
        assert_eq!(money.minor_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(7500).to_string(), "75.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_checked_mul_quantity() {
        let unit_price = Money::from_cents(2500);
        assert_eq!(unit_price.checked_mul_quantity(3), Some(Money::from_cents(7500)));
        assert_eq!(unit_price.checked_mul_quantity(0), Some(Money::zero()));
        assert_eq!(
            Money::from_cents(100_000_000).checked_mul_quantity(u32::MAX),
            Some(Money::from_cents(100_000_000 * u32::MAX as i64))
        );
        assert_eq!(Money::from_cents(i64::MAX / 2).checked_mul_quantity(3), None);
    }

    #[test]
    fn test_add_saturates() {
        let sum: Money = [Money::from_cents(i64::MAX), Money::from_cents(1)].into_iter().sum();
        assert_eq!(sum, Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_sum() {
        let total: Money = [2500, 3000, 2000]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total, Money::from_cents(7500));
    }

    #[test]
    fn test_serializes_as_plain_cents() {
        let json = serde_json::to_string(&Money::from_cents(2500)).unwrap();
        assert_eq!(json, "2500");
    }
}
