//! HTTP client for the points API.
//!
//! One instance serves every wallet in a run. Lookups go out directly or
//! through the proxy assigned to the wallet; the proxy URI's scheme picks
//! the transport (plain HTTP(S) proxying or a SOCKS tunnel).

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Proxy};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::config::ApiConfig;
use crate::domain::WalletPoints;
use crate::error::{Error, FetchError, Result};
use crate::ports::{run_with_policy, PointsFetcher, RetryPolicy};

/// The two numeric fields read from the portfolio response. Everything
/// else in the body is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PortfolioResponse {
    loyalty_points: Decimal,
    eigenlayer_points: Decimal,
}

/// Points lookup over HTTP with a fixed per-attempt timeout and
/// policy-driven retry.
pub struct PointsClient {
    http: Client,
    base_url: String,
    timeout: Duration,
    retry: Arc<dyn RetryPolicy>,
}

impl PointsClient {
    pub fn new(base_url: &str, timeout: Duration, retry: Arc<dyn RetryPolicy>) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            retry,
        })
    }

    pub fn from_config(config: &ApiConfig, retry: Arc<dyn RetryPolicy>) -> Result<Self> {
        Self::new(
            &config.base_url,
            Duration::from_millis(config.timeout_ms),
            retry,
        )
    }

    /// Build a client routing through `uri`. A URI that cannot name a
    /// transport is fatal rather than retried.
    fn proxied(&self, uri: &str) -> Result<Client> {
        let parsed = Url::parse(uri).map_err(|err| Error::InvalidProxy {
            uri: uri.to_string(),
            reason: err.to_string(),
        })?;
        match parsed.scheme() {
            "http" | "https" | "socks4" | "socks5" | "socks5h" => {}
            other => {
                return Err(Error::InvalidProxy {
                    uri: uri.to_string(),
                    reason: format!("unsupported scheme '{other}'"),
                })
            }
        }
        let proxy = Proxy::all(parsed).map_err(|err| Error::InvalidProxy {
            uri: uri.to_string(),
            reason: err.to_string(),
        })?;
        Ok(Client::builder().timeout(self.timeout).proxy(proxy).build()?)
    }

    async fn attempt(
        &self,
        client: &Client,
        wallet: &str,
    ) -> std::result::Result<WalletPoints, FetchError> {
        let url = format!("{}/{}", self.base_url, wallet);
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let body: PortfolioResponse = response.json().await.map_err(FetchError::Decode)?;
        Ok(WalletPoints::from_raw(
            body.loyalty_points,
            body.eigenlayer_points,
        ))
    }
}

#[async_trait]
impl PointsFetcher for PointsClient {
    /// One wallet's lookup. Every retry reuses the same proxy assignment.
    async fn fetch(&self, wallet: &str, proxy: Option<&str>) -> Result<WalletPoints> {
        let proxied;
        let client = match proxy {
            Some(uri) => {
                proxied = self.proxied(uri)?;
                &proxied
            }
            None => &self.http,
        };

        let points = run_with_policy(self.retry.as_ref(), move || async move {
            match self.attempt(client, wallet).await {
                Ok(points) => Ok(points),
                Err(error) => {
                    debug!(wallet, error = %error, "points lookup attempt failed");
                    Err(error)
                }
            }
        })
        .await?;
        Ok(points)
    }
}
