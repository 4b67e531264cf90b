//! Retry with capped exponential backoff for remote calls.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::error::{RemoteError, RemoteResult};

/// Retry policy for remote calls.
///
/// Authorization failures are never retried; everything else is retried up
/// to `max_retries` times with delay `min(initial * multiplier^n, max)`.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Retries after the first failure (0 disables retrying).
    pub max_retries: u32,

    /// Delay before the first retry in milliseconds
    pub initial_delay_ms: u64,

    /// Maximum retry delay in milliseconds
    pub max_delay_ms: u64,

    /// Backoff multiplier (exponential growth)
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 1000,
            max_delay_ms: 4000,
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Fail on the first error.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Delay before retry number `failures` (0-indexed): 1s, 2s, 4s, 4s, ...
    pub fn delay_for(&self, failures: u32) -> Duration {
        let base = self.initial_delay_ms as f64 * self.backoff_multiplier.powi(failures as i32);
        Duration::from_millis(base.min(self.max_delay_ms as f64) as u64)
    }

    /// Whether to retry after `failures` previous failures ended in `error`.
    pub fn should_retry(&self, failures: u32, error: &RemoteError) -> bool {
        error.is_transient() && failures < self.max_retries
    }

    /// Worst-case time spent waiting between attempts.
    pub fn total_retry_time(&self) -> Duration {
        (0..self.max_retries).map(|n| self.delay_for(n)).sum()
    }
}

/// Run `op` until it succeeds, fails terminally, or retries run out.
pub async fn retry_with_backoff<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> RemoteResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = RemoteResult<T>>,
{
    let mut failures = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if policy.should_retry(failures, &e) => {
                let delay = policy.delay_for(failures);
                warn!(
                    "Remote call failed ({}), retry {}/{} in {}ms",
                    e,
                    failures + 1,
                    policy.max_retries,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
                failures += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
