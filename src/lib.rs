//! Pointscan - batched, proxy-aware reward-points checker.
//!
//! Reads a wallet list and an optional proxy list from newline-delimited
//! files, resolves each wallet's two point totals against the points API,
//! and emits a console table plus a CSV export.
//!
//! # Architecture
//!
//! The scheduler is the core; everything it talks to sits behind a trait:
//!
//! - **[`scheduler`]** - contiguous batches, staggered starts, concurrent
//!   lookups within a batch, joined at the end
//! - **[`ports`]** - seams for the scheduler's collaborators:
//!   address/proxy sources, the points fetcher, the retry policy, and the
//!   report sink
//! - **[`adapter`]** - production implementations: file-backed sources,
//!   the HTTP points client, and the terminal/CSV report
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files with CLI overrides
//! - [`domain`] - Point values, batching, proxy assignment, aggregation
//! - [`error`] - Error types for the crate
//! - [`cli`] - Command-line definitions
//! - [`app`] - Application orchestration
//!
//! # Example
//!
//! ```no_run
//! use pointscan::config::Config;
//! use pointscan::app::App;
//!
//! # async fn run() -> pointscan::error::Result<()> {
//! let config = Config::load_or_default("config.toml")?;
//! App::run(config).await
//! # }
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod scheduler;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
