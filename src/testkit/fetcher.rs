//! Scripted points fetcher for scheduler tests.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use tokio::time::Instant;

use crate::domain::WalletPoints;
use crate::error::Result;
use crate::ports::PointsFetcher;

/// Record of one fetch call.
#[derive(Debug, Clone)]
pub struct FetchCall {
    pub wallet: String,
    pub proxy: Option<String>,
    pub at: Instant,
}

/// Returns scripted points per wallet (zero when unscripted) and records
/// every call with its proxy assignment and timestamp.
#[derive(Default)]
pub struct ScriptedFetcher {
    points: HashMap<String, WalletPoints>,
    calls: Mutex<Vec<FetchCall>>,
}

impl ScriptedFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the response for `wallet`.
    #[must_use]
    pub fn respond(mut self, wallet: &str, loyalty: Decimal, eigenlayer: Decimal) -> Self {
        self.points
            .insert(wallet.to_string(), WalletPoints::from_raw(loyalty, eigenlayer));
        self
    }

    /// Every call made so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<FetchCall> {
        self.calls.lock().clone()
    }

    /// The proxy the given wallet was fetched through, for the first call
    /// that matches.
    #[must_use]
    pub fn proxy_for(&self, wallet: &str) -> Option<Option<String>> {
        self.calls
            .lock()
            .iter()
            .find(|call| call.wallet == wallet)
            .map(|call| call.proxy.clone())
    }
}

#[async_trait]
impl PointsFetcher for ScriptedFetcher {
    async fn fetch(&self, wallet: &str, proxy: Option<&str>) -> Result<WalletPoints> {
        self.calls.lock().push(FetchCall {
            wallet: wallet.to_string(),
            proxy: proxy.map(str::to_string),
            at: Instant::now(),
        });
        Ok(self
            .points
            .get(wallet)
            .copied()
            .unwrap_or_else(WalletPoints::zero))
    }
}
