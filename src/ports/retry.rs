//! Pluggable retry policy for lookup attempts.

use std::future::Future;
use std::time::Duration;

use crate::error::FetchError;

/// Decides whether a failed attempt is re-issued and how long to wait
/// first. `attempt` counts from 1.
pub trait RetryPolicy: Send + Sync {
    fn should_retry(&self, attempt: u32, error: &FetchError) -> bool;
    fn delay(&self, attempt: u32) -> Duration;
}

/// Retry forever with no delay.
///
/// Every failure is immediately re-issued, so a wallet the API never
/// answers for keeps its batch open until the process is terminated.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysRetry;

impl RetryPolicy for AlwaysRetry {
    fn should_retry(&self, _attempt: u32, _error: &FetchError) -> bool {
        true
    }

    fn delay(&self, _attempt: u32) -> Duration {
        Duration::ZERO
    }
}

/// Drive `op` through `policy` until it succeeds or the policy gives up.
pub async fn run_with_policy<T, F, Fut>(
    policy: &dyn RetryPolicy,
    mut op: F,
) -> std::result::Result<T, FetchError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<T, FetchError>>,
{
    let mut attempt = 0;
    loop {
        attempt += 1;
        match op().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                if !policy.should_retry(attempt, &error) {
                    return Err(error);
                }
                let delay = policy.delay(attempt);
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}
