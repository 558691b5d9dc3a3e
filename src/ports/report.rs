//! Port for progress display, console table, and CSV export.

use crate::domain::{Totals, WalletRow};
use crate::error::Result;

/// Consumes fetch completions and renders the final report.
///
/// `progress` and `insert_row` are called from concurrent fetch tasks, so
/// implementations must be thread-safe. Rendering and export receive the
/// full row list already sorted by input position.
pub trait ReportSink: Send + Sync {
    /// Announce the run size before any fetch starts.
    fn begin(&self, total: usize);

    /// One more wallet finished.
    fn progress(&self, completed: usize, total: usize);

    /// A resolved row, in completion order.
    fn insert_row(&self, row: &WalletRow);

    /// All fetches are done.
    fn finish(&self);

    /// Render the console table: data rows, a blank separator, and a
    /// `Total` row. The total appears only here, never in the CSV.
    fn render_table(&self, rows: &[WalletRow], totals: &Totals);

    /// Write the CSV: header plus one row per wallet, no total row.
    fn export_csv(&self, rows: &[WalletRow]) -> Result<()>;
}
