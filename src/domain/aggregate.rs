//! Shared result set: per-wallet rows plus running totals.

use parking_lot::Mutex;

use super::points::{Totals, WalletRow};

#[derive(Debug, Default)]
struct Inner {
    rows: Vec<WalletRow>,
    totals: Totals,
}

/// Accumulates rows and totals as concurrent fetches complete.
///
/// Every completing fetch task records through the same handle. The row
/// append and the totals update happen under one lock acquisition, so
/// totals always equal the sum over the recorded rows.
#[derive(Debug, Default)]
pub struct ResultSet {
    inner: Mutex<Inner>,
}

impl ResultSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one resolved wallet. Returns how many wallets have completed
    /// so far, for driving the progress display.
    pub fn record(&self, row: WalletRow) -> usize {
        let mut inner = self.inner.lock();
        inner.totals.loyalty += row.points.loyalty;
        inner.totals.eigenlayer += row.points.eigenlayer;
        inner.rows.push(row);
        inner.rows.len()
    }

    /// All rows sorted by original input position, regardless of the order
    /// fetches completed in.
    #[must_use]
    pub fn rows(&self) -> Vec<WalletRow> {
        let mut rows = self.inner.lock().rows.clone();
        rows.sort_by_key(|row| row.index);
        rows
    }

    #[must_use]
    pub fn totals(&self) -> Totals {
        self.inner.lock().totals
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WalletPoints;
    use rust_decimal_macros::dec;

    fn row(index: usize, loyalty: rust_decimal::Decimal) -> WalletRow {
        WalletRow {
            index,
            wallet: format!("0x{index:02}"),
            points: WalletPoints::from_raw(loyalty, loyalty * dec!(2)),
        }
    }

    #[test]
    fn record_returns_completed_count() {
        let set = ResultSet::new();
        assert_eq!(set.record(row(1, dec!(1))), 1);
        assert_eq!(set.record(row(2, dec!(1))), 2);
    }

    #[test]
    fn rows_are_sorted_by_index_regardless_of_completion_order() {
        let set = ResultSet::new();
        set.record(row(3, dec!(1)));
        set.record(row(1, dec!(1)));
        set.record(row(2, dec!(1)));

        let indices: Vec<usize> = set.rows().iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn totals_are_independent_of_completion_order() {
        let rows = [row(1, dec!(1.25)), row(2, dec!(0.50)), row(3, dec!(2.00))];
        let orders: [[usize; 3]; 6] = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];

        for order in orders {
            let set = ResultSet::new();
            for position in order {
                set.record(rows[position].clone());
            }
            let totals = set.totals();
            assert_eq!(totals.loyalty, dec!(3.75));
            assert_eq!(totals.eigenlayer, dec!(7.50));
        }
    }

    #[test]
    fn duplicate_indices_keep_both_rows() {
        let set = ResultSet::new();
        set.record(row(1, dec!(1)));
        set.record(row(1, dec!(2)));

        assert_eq!(set.rows().len(), 2);
        assert_eq!(set.totals().loyalty, dec!(3.00));
    }
}
