//! Amount type for currency values
//!
//! Amounts are whole currency units stored as i64, matching the
//! whole-rupee granularity the tracker works at. Provides arithmetic,
//! parsing and percentage helpers used by the budget derivations.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::error::{FlowError, FlowResult};

/// A monetary amount in whole currency units
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    pub const fn new(units: i64) -> Self {
        Self(units)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn units(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Saturating subtraction that never goes below zero
    pub fn saturating_sub(&self, other: Self) -> Self {
        Self((self.0 - other.0).max(0))
    }

    /// Parse an amount from a string
    ///
    /// Accepts a plain integer, optionally prefixed with a currency symbol.
    pub fn parse(s: &str) -> FlowResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('₹').or_else(|| s.strip_prefix('$')).unwrap_or(s);
        let s = s.replace(',', "");
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| FlowError::Validation(format!("Invalid amount: {}", s)))
    }

    /// This amount as a rounded percentage of `whole`
    ///
    /// Returns 0 when `whole` is zero or negative, so an unbudgeted
    /// category never divides by zero.
    pub fn percent_of(&self, whole: Self) -> i64 {
        if whole.0 <= 0 {
            return 0;
        }
        // Round half away from zero, as the derived stats expect
        let scaled = self.0 * 100;
        if scaled >= 0 {
            (scaled + whole.0 / 2) / whole.0
        } else {
            (scaled - whole.0 / 2) / whole.0
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Amount::new(1000);
        let b = Amount::new(300);
        assert_eq!((a + b).units(), 1300);
        assert_eq!((a - b).units(), 700);
        assert_eq!(b.saturating_sub(a), Amount::zero());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("500").unwrap().units(), 500);
        assert_eq!(Amount::parse("₹500").unwrap().units(), 500);
        assert_eq!(Amount::parse(" 1,000 ").unwrap().units(), 1000);
        assert!(Amount::parse("12.50").is_err());
        assert!(Amount::parse("abc").is_err());
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(Amount::new(500).percent_of(Amount::new(800)), 63);
        assert_eq!(Amount::new(700).percent_of(Amount::new(1000)), 70);
        assert_eq!(Amount::new(1000).percent_of(Amount::new(1000)), 100);
        assert_eq!(Amount::new(1200).percent_of(Amount::new(1000)), 120);
        // Zero budget never divides by zero
        assert_eq!(Amount::new(500).percent_of(Amount::zero()), 0);
    }

    #[test]
    fn test_sum() {
        let total: Amount = [Amount::new(100), Amount::new(200), Amount::new(300)]
            .into_iter()
            .sum();
        assert_eq!(total.units(), 600);
    }

    #[test]
    fn test_serialization_is_bare_number() {
        let json = serde_json::to_string(&Amount::new(800)).unwrap();
        assert_eq!(json, "800");
        let back: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(back.units(), 800);
    }
}
