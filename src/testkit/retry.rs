//! Bounded retry policy and error builders for tests.

use std::time::Duration;

use crate::error::FetchError;
use crate::ports::RetryPolicy;

/// Give up after `max_attempts`, retrying immediately in between.
#[derive(Debug, Clone, Copy)]
pub struct BoundedRetry {
    pub max_attempts: u32,
}

impl RetryPolicy for BoundedRetry {
    fn should_retry(&self, attempt: u32, _error: &FetchError) -> bool {
        attempt < self.max_attempts
    }

    fn delay(&self, _attempt: u32) -> Duration {
        Duration::ZERO
    }
}

/// A transient lookup failure (HTTP 500) for driving retry policies.
#[must_use]
pub fn transient_error() -> FetchError {
    FetchError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR)
}
