//! Core data model: point values, batching, proxy assignment, aggregation.

mod aggregate;
mod batch;
mod points;
mod proxy;

pub use aggregate::ResultSet;
pub use batch::{indexed_batches, BatchPolicy};
pub use points::{round2, Totals, WalletPoints, WalletRow};
pub use proxy::ProxyPool;
