//! Wallet point values and report rows.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round to two decimal places, midpoints away from zero, and keep the
/// two-digit scale so values render as `1.01` / `2.00` / `0.00`.
#[must_use]
pub fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// The two reward metrics the points API reports per wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalletPoints {
    pub loyalty: Decimal,
    pub eigenlayer: Decimal,
}

impl WalletPoints {
    /// Build from raw API values, rounding each to two decimal places.
    #[must_use]
    pub fn from_raw(loyalty: Decimal, eigenlayer: Decimal) -> Self {
        Self {
            loyalty: round2(loyalty),
            eigenlayer: round2(eigenlayer),
        }
    }

    /// Zero points, rendered as `0.00`.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            loyalty: Decimal::new(0, 2),
            eigenlayer: Decimal::new(0, 2),
        }
    }
}

/// One resolved wallet: 1-based input position, address, and its points.
///
/// Duplicate addresses in the input produce duplicate rows, each resolved
/// independently at its own position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletRow {
    pub index: usize,
    pub wallet: String,
    pub points: WalletPoints,
}

/// Running aggregate over all resolved wallets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub loyalty: Decimal,
    pub eigenlayer: Decimal,
}

impl Default for Totals {
    fn default() -> Self {
        Self {
            loyalty: Decimal::new(0, 2),
            eigenlayer: Decimal::new(0, 2),
        }
    }
}
