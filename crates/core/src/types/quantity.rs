//! Cart line quantity with a hard floor of one.

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a quantity below the floor is supplied.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("quantity must be at least 1 (got {0})")]
pub struct InvalidQuantity(pub u32);

/// A cart line quantity.
///
/// Invariant: the value is never below 1. Decrementing saturates at the
/// floor; incrementing is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// The minimum representable quantity.
    pub const MIN: Self = Self(1);

    /// Create a quantity, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidQuantity`] if `value` is below 1.
    pub const fn new(value: u32) -> Result<Self, InvalidQuantity> {
        if value == 0 {
            Err(InvalidQuantity(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// One step up. Unbounded (modulo `u32`).
    #[must_use]
    pub const fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// One step down, saturating at the floor of 1.
    #[must_use]
    pub const fn decrement(self) -> Self {
        if self.0 > 1 { Self(self.0 - 1) } else { Self::MIN }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u32> for Quantity {
    type Error = InvalidQuantity;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
