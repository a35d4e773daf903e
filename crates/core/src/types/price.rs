//! Price representation using decimal arithmetic.
//!
//! Prices come from the backend API as JSON numbers and are displayed in
//! rubles. The amount is kept as a [`Decimal`] so display never picks up
//! floating-point noise (`199.99999` instead of `200`).

use core::fmt;
use core::ops::Mul;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A ruble amount as reported by the backend.
///
/// The storefront never computes cart totals itself - the total is whatever
/// the backend last returned. Multiplication exists only for per-line display
/// totals (unit price x quantity) in the quantity stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero rubles.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Self(Decimal::from(amount))
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl fmt::Display for Price {
    /// Formats as `"<amount> ₽"`, e.g. `200 ₽`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ₽", self.0.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_whole_amount() {
        assert_eq!(Price::from(200).to_string(), "200 ₽");
    }

    #[test]
    fn test_display_strips_trailing_zeros() {
        let price = Price::new(Decimal::new(20000, 2)); // 200.00
        assert_eq!(price.to_string(), "200 ₽");
    }

    #[test]
    fn test_display_fractional() {
        let price = Price::new(Decimal::new(19950, 2)); // 199.50
        assert_eq!(price.to_string(), "199.5 ₽");
    }

    #[test]
    fn test_line_total() {
        assert_eq!(Price::from(100) * 2, Price::from(200));
        assert_eq!(Price::ZERO * 7, Price::ZERO);
    }

    #[test]
    fn test_deserialize_from_number() {
        let price: Price = serde_json::from_str("200").expect("integer amount");
        assert_eq!(price, Price::from(200));

        let price: Price = serde_json::from_str("199.5").expect("fractional amount");
        assert_eq!(price, Price::new(Decimal::new(1995, 1)));
    }
}
