//! Exact, non-negative monetary amounts.
//!
//! `Money` is immutable: arithmetic returns a fresh instance, and the only ways in
//! (`of`, deserialization) reject negative amounts. Amounts are bounded above by the
//! decimal range, so `add` and `multiply` report overflow instead of wrapping or panicking.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::quantity::Quantity;

/// A non-negative decimal amount of money.
///
/// Deserialization goes through [`Money::of`], so a negative amount is rejected at the
/// boundary exactly like one built in code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// Additive identity; the seed when totalling an empty set of line items.
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn of(amount: Decimal) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::invalid_value(format!(
                "money must not be negative (got {amount})"
            )));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Fails with `InvalidValue` when the sum leaves the representable range.
    pub fn add(self, other: Money) -> DomainResult<Money> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or_else(|| DomainError::invalid_value(format!("money overflow: {self} + {other}")))
    }

    /// Fails with `InvalidValue` when the product leaves the representable range.
    pub fn multiply(self, quantity: Quantity) -> DomainResult<Money> {
        let factor = Decimal::from(quantity.value());
        self.0.checked_mul(factor).map(Money).ok_or_else(|| {
            DomainError::invalid_value(format!("money overflow: {self} x {}", quantity.value()))
        })
    }

    pub fn is_greater_than(&self, other: &Money) -> bool {
        self.0 > other.0
    }
}

impl TryFrom<Decimal> for Money {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::of(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
