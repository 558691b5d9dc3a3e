//! Terminal progress, table rendering, and CSV export.

use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tabled::{Table, Tabled};
use tracing::debug;

use crate::domain::{Totals, WalletRow};
use crate::error::Result;
use crate::ports::ReportSink;

const CSV_HEADER: [&str; 4] = ["№", "wallet", "loyaltyPoints", "eigenlayerPoints"];

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "№")]
    n: String,
    #[tabled(rename = "wallet")]
    wallet: String,
    #[tabled(rename = "loyaltyPoints")]
    loyalty: String,
    #[tabled(rename = "eigenlayerPoints")]
    eigenlayer: String,
}

impl TableRow {
    fn blank() -> Self {
        Self {
            n: String::new(),
            wallet: String::new(),
            loyalty: String::new(),
            eigenlayer: String::new(),
        }
    }
}

impl From<&WalletRow> for TableRow {
    fn from(row: &WalletRow) -> Self {
        Self {
            n: row.index.to_string(),
            wallet: row.wallet.clone(),
            loyalty: row.points.loyalty.to_string(),
            eigenlayer: row.points.eigenlayer.to_string(),
        }
    }
}

/// Console and CSV report: a live progress bar while fetches run, then the
/// sorted table with a `Total` row, and a CSV file without one.
pub struct TerminalReport {
    bar: ProgressBar,
    csv_path: PathBuf,
}

impl TerminalReport {
    #[must_use]
    pub fn new(csv_path: PathBuf) -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("  {bar:40.cyan/blue} {pos}/{len} wallets")
                .unwrap(),
        );
        Self { bar, csv_path }
    }

    fn table_string(rows: &[WalletRow], totals: &Totals) -> String {
        let mut out: Vec<TableRow> = rows.iter().map(TableRow::from).collect();
        out.push(TableRow::blank());
        out.push(TableRow {
            n: String::new(),
            wallet: "Total".to_string(),
            loyalty: totals.loyalty.to_string(),
            eigenlayer: totals.eigenlayer.to_string(),
        });
        Table::new(out).to_string()
    }
}

impl ReportSink for TerminalReport {
    fn begin(&self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(0);
    }

    fn progress(&self, completed: usize, _total: usize) {
        self.bar.set_position(completed as u64);
    }

    fn insert_row(&self, row: &WalletRow) {
        debug!(index = row.index, wallet = %row.wallet, "row resolved");
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
        println!("  {} all wallets fetched", "✓".green());
    }

    fn render_table(&self, rows: &[WalletRow], totals: &Totals) {
        println!();
        for line in Self::table_string(rows, totals).lines() {
            println!("  {line}");
        }
        println!();
    }

    fn export_csv(&self, rows: &[WalletRow]) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.csv_path)?;
        writer.write_record(CSV_HEADER)?;
        for row in rows {
            writer.write_record([
                row.index.to_string(),
                row.wallet.clone(),
                row.points.loyalty.to_string(),
                row.points.eigenlayer.to_string(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WalletPoints;
    use rust_decimal_macros::dec;

    fn rows() -> Vec<WalletRow> {
        vec![
            WalletRow {
                index: 1,
                wallet: "0xA".to_string(),
                points: WalletPoints::from_raw(dec!(1.005), dec!(2.004)),
            },
            WalletRow {
                index: 2,
                wallet: "0xB".to_string(),
                points: WalletPoints::zero(),
            },
        ]
    }

    #[test]
    fn table_has_total_row_after_blank_separator() {
        let totals = Totals {
            loyalty: dec!(1.01),
            eigenlayer: dec!(2.00),
        };
        let table = TerminalReport::table_string(&rows(), &totals);

        assert!(table.contains("loyaltyPoints"));
        assert!(table.contains("0xA"));
        assert!(table.contains("Total"));
        assert!(table.contains("1.01"));
        assert!(table.contains("2.00"));
    }

    #[test]
    fn table_renders_points_with_two_decimals() {
        let table = TerminalReport::table_string(&rows(), &Totals::default());
        assert!(table.contains("0.00"));
        assert!(table.contains("1.01"));
    }
}
