//! Recording report sink for scheduler tests.

use parking_lot::Mutex;

use crate::domain::{Totals, WalletRow};
use crate::error::Result;
use crate::ports::ReportSink;

/// What the scheduler told the sink, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Begin { total: usize },
    Progress { completed: usize, total: usize },
    Row(WalletRow),
    Finish,
}

/// Captures every sink call for assertions.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SinkEvent>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().clone()
    }

    /// Rows in the order they were inserted (completion order).
    #[must_use]
    pub fn rows(&self) -> Vec<WalletRow> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Row(row) => Some(row.clone()),
                _ => None,
            })
            .collect()
    }
}

impl ReportSink for RecordingSink {
    fn begin(&self, total: usize) {
        self.events.lock().push(SinkEvent::Begin { total });
    }

    fn progress(&self, completed: usize, total: usize) {
        self.events.lock().push(SinkEvent::Progress { completed, total });
    }

    fn insert_row(&self, row: &WalletRow) {
        self.events.lock().push(SinkEvent::Row(row.clone()));
    }

    fn finish(&self) {
        self.events.lock().push(SinkEvent::Finish);
    }

    fn render_table(&self, _rows: &[WalletRow], _totals: &Totals) {}

    fn export_csv(&self, _rows: &[WalletRow]) -> Result<()> {
        Ok(())
    }
}
