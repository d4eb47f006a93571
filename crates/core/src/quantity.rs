//! Non-negative item counts.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// How many units of a product a line item holds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct Quantity(u64);

impl Quantity {
    pub fn of(n: i64) -> DomainResult<Self> {
        u64::try_from(n)
            .map(Self)
            .map_err(|_| DomainError::invalid_value(format!("quantity must not be negative (got {n})")))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for Quantity {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::of(value)
    }
}

impl From<Quantity> for u64 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}
