//! Cash reconciliation: matching the expected cash of a closing against a
//! manual count of physical bills and coins.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Bills accepted by the register, largest first.
pub const BILLS: [i64; 7] = [100_000, 50_000, 20_000, 10_000, 5_000, 2_000, 1_000];

/// Coins accepted by the register.
pub const COINS: [i64; 3] = [500, 200, 100];

/// All ten denominations, bills then coins.
pub const DENOMINATIONS: [i64; 10] = [
    100_000, 50_000, 20_000, 10_000, 5_000, 2_000, 1_000, 500, 200, 100,
];

/// Sub-peso rounding tolerance for the counted-vs-expected match.
pub const CASH_TOLERANCE: f64 = 1.0;

/// Tally of physical bills/coins. Transient UI state, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenominationCount {
    counts: BTreeMap<i64, u32>,
}

impl DenominationCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the count for one denomination. Negative input clamps to zero;
    /// face values outside the fixed set are ignored.
    pub fn set_count(&mut self, denomination: i64, count: i64) {
        if !DENOMINATIONS.contains(&denomination) {
            return;
        }
        self.counts.insert(denomination, count.max(0) as u32);
    }

    pub fn count(&self, denomination: i64) -> u32 {
        self.counts.get(&denomination).copied().unwrap_or(0)
    }

    /// Weighted subtotal for one denomination.
    pub fn subtotal(&self, denomination: i64) -> f64 {
        (self.count(denomination) as i64 * denomination) as f64
    }

    /// Σ count × face value over the ten fixed denominations.
    pub fn total(&self) -> f64 {
        DENOMINATIONS.iter().map(|d| self.subtotal(*d)).sum()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.counts.values().all(|c| *c == 0)
    }
}

/// Sign of the counted-vs-expected difference, for presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashDelta {
    /// More cash counted than expected ("sobra").
    Surplus,
    /// Less cash counted than expected ("falta").
    Shortfall,
    Exact,
}

/// Result of one reconciliation pass. Recomputed on every keystroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashCount {
    pub total_counted: f64,
    /// `total_counted − expected`.
    pub difference: f64,
    /// Whether the count matches the expected cash within [`CASH_TOLERANCE`].
    pub is_valid: bool,
}

impl CashCount {
    pub fn delta(&self) -> CashDelta {
        if self.difference > 0.0 {
            CashDelta::Surplus
        } else if self.difference < 0.0 {
            CashDelta::Shortfall
        } else {
            CashDelta::Exact
        }
    }
}

/// Pure function of expected cash and the denomination tally.
pub fn reconcile(expected: f64, counts: &DenominationCount) -> CashCount {
    let total_counted = counts.total();
    let difference = total_counted - expected;
    CashCount {
        total_counted,
        difference,
        is_valid: difference.abs() < CASH_TOLERANCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_exact_weighted_sum() {
        let mut tally = DenominationCount::new();
        tally.set_count(100_000, 2);
        tally.set_count(20_000, 3);
        tally.set_count(500, 4);
        tally.set_count(100, 1);
        assert_eq!(tally.total(), 262_100.0);
    }

    #[test]
    fn changing_one_count_moves_total_by_face_value() {
        let mut tally = DenominationCount::new();
        tally.set_count(5_000, 1);
        let before = tally.total();
        tally.set_count(5_000, 4);
        assert_eq!(tally.total() - before, 3.0 * 5_000.0);
    }

    #[test]
    fn negative_counts_clamp_to_zero() {
        let mut tally = DenominationCount::new();
        tally.set_count(2_000, -7);
        assert_eq!(tally.count(2_000), 0);
        assert_eq!(tally.total(), 0.0);
        assert!(tally.is_empty());
    }

    #[test]
    fn unknown_denominations_are_ignored() {
        let mut tally = DenominationCount::new();
        tally.set_count(3_000, 5);
        assert_eq!(tally.total(), 0.0);
    }

    #[test]
    fn exact_match_is_valid() {
        let mut tally = DenominationCount::new();
        tally.set_count(50_000, 1);
        let result = reconcile(50_000.0, &tally);
        assert!(result.is_valid);
        assert_eq!(result.difference, 0.0);
        assert_eq!(result.delta(), CashDelta::Exact);
    }

    #[test]
    fn tolerance_boundary_is_exclusive() {
        let mut tally = DenominationCount::new();
        tally.set_count(1_000, 1);
        // Off by exactly one peso: invalid.
        let off_by_one = reconcile(999.0, &tally);
        assert!(!off_by_one.is_valid);
        // Sub-peso difference: valid.
        let fractional = reconcile(1_000.5, &tally);
        assert!(fractional.is_valid);
    }

    #[test]
    fn delta_reports_surplus_and_shortfall() {
        let mut tally = DenominationCount::new();
        tally.set_count(10_000, 1);
        assert_eq!(reconcile(8_000.0, &tally).delta(), CashDelta::Surplus);
        assert_eq!(reconcile(12_000.0, &tally).delta(), CashDelta::Shortfall);
    }
}
