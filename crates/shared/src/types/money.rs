//! Money rounding with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal`; rounding happens once, when a
//! report row is produced.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Rounding rule applied to money amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Midpoints round away from zero (1.005 -> 1.01, -1.005 -> -1.01).
    #[default]
    HalfAwayFromZero,
    /// Banker's rounding: midpoints round to the even neighbour (1.005 -> 1.00).
    HalfEven,
}

impl RoundingMode {
    const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// Rounds an amount to `decimal_places` using the given rule.
///
/// Trailing zeros are normalized away so `150.00` and `150` compare and
/// serialize identically.
#[must_use]
pub fn round_money(amount: Decimal, decimal_places: u32, mode: RoundingMode) -> Decimal {
    amount
        .round_dp_with_strategy(decimal_places, mode.strategy())
        .normalize()
}

#[cfg(test)]
#[path = "money_tests.rs"]
mod tests;
