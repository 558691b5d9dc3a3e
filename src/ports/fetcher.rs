//! Port for one wallet's points lookup.

use async_trait::async_trait;

use crate::domain::WalletPoints;
use crate::error::Result;

/// Fetches the two point totals for a single wallet, optionally through an
/// outbound proxy.
///
/// Implementations retry failed attempts internally through their
/// [`RetryPolicy`](crate::ports::RetryPolicy); under the default policy a
/// lookup never fails, it only takes longer.
#[async_trait]
pub trait PointsFetcher: Send + Sync {
    async fn fetch(&self, wallet: &str, proxy: Option<&str>) -> Result<WalletPoints>;
}
