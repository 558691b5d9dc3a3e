use std::sync::Arc;
use std::time::Duration;

use rust_decimal_macros::dec;
use tokio::time::Instant;

use pointscan::config::BatchConfig;
use pointscan::domain::{BatchPolicy, ProxyPool, ResultSet};
use pointscan::scheduler::BatchScheduler;
use pointscan::testkit::{RecordingSink, ScriptedFetcher, SinkEvent};

fn wallets(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn scheduler(
    fetcher: Arc<ScriptedFetcher>,
    sink: Arc<RecordingSink>,
    results: Arc<ResultSet>,
    pool: ProxyPool,
) -> BatchScheduler {
    let policy = BatchPolicy::for_run(&BatchConfig::default(), !pool.is_empty());
    BatchScheduler::new(fetcher, sink, results, pool, policy)
}

#[tokio::test(start_paused = true)]
async fn every_wallet_gets_one_row_at_its_input_position() {
    let fetcher = Arc::new(
        ScriptedFetcher::new().respond("0xA", dec!(1.005), dec!(2.004)),
    );
    let sink = Arc::new(RecordingSink::new());
    let results = Arc::new(ResultSet::new());

    scheduler(
        Arc::clone(&fetcher),
        Arc::clone(&sink),
        Arc::clone(&results),
        ProxyPool::default(),
    )
    .run_all(wallets(&["0xA", "0xB", "0xC"]))
    .await
    .expect("run_all");

    let rows = results.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows.iter().map(|r| r.index).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(
        rows.iter().map(|r| r.wallet.as_str()).collect::<Vec<_>>(),
        vec!["0xA", "0xB", "0xC"]
    );

    assert_eq!(rows[0].points.loyalty.to_string(), "1.01");
    assert_eq!(rows[0].points.eigenlayer.to_string(), "2.00");
    assert_eq!(rows[1].points.loyalty.to_string(), "0.00");

    let totals = results.totals();
    assert_eq!(totals.loyalty, dec!(1.01));
    assert_eq!(totals.eigenlayer, dec!(2.00));
}

#[tokio::test(start_paused = true)]
async fn batches_start_one_stagger_apart_without_proxies() {
    let fetcher = Arc::new(ScriptedFetcher::new());
    let sink = Arc::new(RecordingSink::new());
    let results = Arc::new(ResultSet::new());

    let start = Instant::now();
    scheduler(
        Arc::clone(&fetcher),
        sink,
        results,
        ProxyPool::default(),
    )
    .run_all(wallets(&["0xA", "0xB", "0xC"]))
    .await
    .expect("run_all");

    // Batch size 1 without proxies: one wallet per batch, staggered by 1s.
    let mut offsets: Vec<Duration> = fetcher
        .calls()
        .iter()
        .map(|call| call.at.duration_since(start))
        .collect();
    offsets.sort();
    assert_eq!(
        offsets,
        vec![
            Duration::from_millis(0),
            Duration::from_millis(1000),
            Duration::from_millis(2000),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn proxied_run_assigns_pool_entries_by_position() {
    let fetcher = Arc::new(ScriptedFetcher::new());
    let sink = Arc::new(RecordingSink::new());
    let results = Arc::new(ResultSet::new());
    let pool = ProxyPool::new(vec![
        "http://a:8080".to_string(),
        "http://b:8080".to_string(),
    ]);

    scheduler(Arc::clone(&fetcher), sink, Arc::clone(&results), pool)
        .run_all(wallets(&["0xA", "0xB", "0xC"]))
        .await
        .expect("run_all");

    // pool[i] while in range, then back to pool[0].
    assert_eq!(
        fetcher.proxy_for("0xA"),
        Some(Some("http://a:8080".to_string()))
    );
    assert_eq!(
        fetcher.proxy_for("0xB"),
        Some(Some("http://b:8080".to_string()))
    );
    assert_eq!(
        fetcher.proxy_for("0xC"),
        Some(Some("http://a:8080".to_string()))
    );
    assert_eq!(results.rows().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn proxied_run_uses_wider_batches() {
    let fetcher = Arc::new(ScriptedFetcher::new());
    let sink = Arc::new(RecordingSink::new());
    let results = Arc::new(ResultSet::new());
    let names: Vec<String> = (0..12).map(|i| format!("0x{i:02}")).collect();
    let pool = ProxyPool::new(vec!["http://a:8080".to_string()]);

    let start = Instant::now();
    scheduler(Arc::clone(&fetcher), sink, results, pool)
        .run_all(names)
        .await
        .expect("run_all");

    // 12 wallets at batch size 10: first ten at t=0, last two at t=1s.
    let offsets: Vec<Duration> = fetcher
        .calls()
        .iter()
        .map(|call| call.at.duration_since(start))
        .collect();
    assert_eq!(offsets.iter().filter(|o| o.is_zero()).count(), 10);
    assert_eq!(
        offsets
            .iter()
            .filter(|o| **o == Duration::from_millis(1000))
            .count(),
        2
    );
}

#[tokio::test(start_paused = true)]
async fn duplicate_addresses_resolve_independently() {
    let fetcher = Arc::new(
        ScriptedFetcher::new().respond("0xA", dec!(1), dec!(1)),
    );
    let sink = Arc::new(RecordingSink::new());
    let results = Arc::new(ResultSet::new());

    scheduler(
        fetcher,
        sink,
        Arc::clone(&results),
        ProxyPool::default(),
    )
    .run_all(wallets(&["0xA", "0xA"]))
    .await
    .expect("run_all");

    let rows = results.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].index, 1);
    assert_eq!(rows[1].index, 2);
    assert_eq!(rows[0].wallet, rows[1].wallet);
    assert_eq!(results.totals().loyalty, dec!(2.00));
}

#[tokio::test(start_paused = true)]
async fn sink_sees_every_completion_and_a_final_count() {
    let fetcher = Arc::new(ScriptedFetcher::new());
    let sink = Arc::new(RecordingSink::new());
    let results = Arc::new(ResultSet::new());

    scheduler(
        fetcher,
        Arc::clone(&sink),
        results,
        ProxyPool::default(),
    )
    .run_all(wallets(&["0xA", "0xB", "0xC"]))
    .await
    .expect("run_all");

    assert_eq!(sink.rows().len(), 3);

    let progress: Vec<(usize, usize)> = sink
        .events()
        .iter()
        .filter_map(|event| match event {
            SinkEvent::Progress { completed, total } => Some((*completed, *total)),
            _ => None,
        })
        .collect();
    assert_eq!(progress.len(), 3);
    assert!(progress.iter().all(|(_, total)| *total == 3));
    assert_eq!(progress.last(), Some(&(3, 3)));
}
