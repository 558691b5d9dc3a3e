//! App orchestration module.
//!
//! Wires the file-backed sources, the HTTP points client, the batch
//! scheduler, and the terminal report into one run.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::{FileAddressSource, FileProxySource, PointsClient, TerminalReport};
use crate::config::Config;
use crate::domain::{BatchPolicy, ResultSet};
use crate::error::Result;
use crate::ports::{AddressSource, AlwaysRetry, ProxySource, ReportSink};
use crate::scheduler::BatchScheduler;

/// Main application struct.
pub struct App;

impl App {
    /// Run one full report: load inputs, resolve every wallet, print the
    /// table, write the CSV.
    pub async fn run(config: Config) -> Result<()> {
        let wallets = FileAddressSource::new(config.input.wallets.clone()).load()?;
        if wallets.is_empty() {
            warn!(path = %config.input.wallets.display(), "wallet list is empty, nothing to do");
            return Ok(());
        }

        let pool = FileProxySource::new(config.input.proxies.clone()).load()?;
        let policy = BatchPolicy::for_run(&config.batch, !pool.is_empty());
        info!(wallets = wallets.len(), proxies = pool.len(), "loaded inputs");

        let fetcher = Arc::new(PointsClient::from_config(&config.api, Arc::new(AlwaysRetry))?);
        let report = Arc::new(TerminalReport::new(config.output.csv.clone()));
        let results = Arc::new(ResultSet::new());

        report.begin(wallets.len());
        let scheduler = BatchScheduler::new(
            fetcher,
            Arc::clone(&report) as Arc<dyn ReportSink>,
            Arc::clone(&results),
            pool,
            policy,
        );
        scheduler.run_all(wallets).await?;
        report.finish();
        info!(resolved = results.len(), "all lookups resolved");

        let rows = results.rows();
        let totals = results.totals();
        report.render_table(&rows, &totals);
        if let Err(err) = report.export_csv(&rows) {
            warn!(error = %err, path = %config.output.csv.display(), "CSV export failed");
        }

        Ok(())
    }
}
