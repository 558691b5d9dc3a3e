//! Batched, staggered dispatch of wallet lookups.
//!
//! Splits the input into contiguous batches, starts batch *i* after an
//! `i * stagger` delay, and runs every lookup in a batch concurrently.
//! The stagger only gates batch starts; batches do not wait for earlier
//! batches to finish, and nothing bounds how many requests are in flight
//! once batches pile up behind slow wallets. A bounded worker pool could
//! replace the stagger without breaking any output ordering guarantee
//! (there are none; rows are sorted by input position at render time).

use std::sync::Arc;

use futures_util::future::join_all;
use tokio::time::sleep;
use tracing::info;

use crate::domain::{indexed_batches, BatchPolicy, ProxyPool, ResultSet, WalletRow};
use crate::error::Result;
use crate::ports::{PointsFetcher, ReportSink};

/// Runs every wallet lookup for one report.
pub struct BatchScheduler {
    fetcher: Arc<dyn PointsFetcher>,
    sink: Arc<dyn ReportSink>,
    results: Arc<ResultSet>,
    pool: Arc<ProxyPool>,
    policy: BatchPolicy,
}

impl BatchScheduler {
    #[must_use]
    pub fn new(
        fetcher: Arc<dyn PointsFetcher>,
        sink: Arc<dyn ReportSink>,
        results: Arc<ResultSet>,
        pool: ProxyPool,
        policy: BatchPolicy,
    ) -> Self {
        Self {
            fetcher,
            sink,
            results,
            pool: Arc::new(pool),
            policy,
        }
    }

    /// Resolve every address. Completes once the last batch joins; a
    /// wallet whose lookups never succeed keeps its batch open
    /// indefinitely.
    pub async fn run_all(&self, addresses: Vec<String>) -> Result<()> {
        let total = addresses.len();
        let batches = indexed_batches(&addresses, self.policy.size);
        info!(
            wallets = total,
            batches = batches.len(),
            batch_size = self.policy.size,
            stagger_ms = self.policy.stagger.as_millis() as u64,
            "dispatching lookups"
        );

        let mut handles = Vec::with_capacity(batches.len());
        for (position, batch) in batches.into_iter().enumerate() {
            let delay = self.policy.stagger * position as u32;
            let fetcher = Arc::clone(&self.fetcher);
            let sink = Arc::clone(&self.sink);
            let results = Arc::clone(&self.results);
            let pool = Arc::clone(&self.pool);
            handles.push(tokio::spawn(async move {
                sleep(delay).await;
                run_batch(batch, total, fetcher, sink, results, pool).await
            }));
        }

        for handle in handles {
            handle.await??;
        }
        Ok(())
    }
}

/// One batch: every lookup in flight at once, done when all have joined.
async fn run_batch(
    batch: Vec<(usize, String)>,
    total: usize,
    fetcher: Arc<dyn PointsFetcher>,
    sink: Arc<dyn ReportSink>,
    results: Arc<ResultSet>,
    pool: Arc<ProxyPool>,
) -> Result<()> {
    let lookups = batch.into_iter().map(|(position, wallet)| {
        let fetcher = Arc::clone(&fetcher);
        let sink = Arc::clone(&sink);
        let results = Arc::clone(&results);
        let pool = Arc::clone(&pool);
        async move {
            let points = fetcher.fetch(&wallet, pool.assign(position)).await?;
            let row = WalletRow {
                index: position + 1,
                wallet,
                points,
            };
            let completed = results.record(row.clone());
            sink.insert_row(&row);
            sink.progress(completed, total);
            Ok(())
        }
    });

    let outcomes: Vec<Result<()>> = join_all(lookups).await;
    for outcome in outcomes {
        outcome?;
    }
    Ok(())
}
