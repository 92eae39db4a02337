//! Bounded exponential-backoff retry for remote operations.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::error::RemoteError;
use crate::frontend::{Frontend, Notice};
use crate::state::ActivityTracker;

/// Backoff schedule and busy-indicator threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Wait before the first retry; doubled after each failure
    pub initial_delay: Duration,
    /// Retries after the first attempt
    pub max_retries: u32,
    /// How long a sequence may run before it counts as slow
    pub busy_threshold: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(2000),
            max_retries: 5,
            busy_threshold: Duration::from_millis(500),
        }
    }
}

/// Runs remote operations with retry, notices and the activity indicator.
#[derive(Clone)]
pub struct RetryExecutor {
    policy: RetryPolicy,
    activity: ActivityTracker,
    frontend: Arc<dyn Frontend>,
}

impl RetryExecutor {
    pub fn new(policy: RetryPolicy, activity: ActivityTracker, frontend: Arc<dyn Frontend>) -> Self {
        Self {
            policy,
            activity,
            frontend,
        }
    }

    pub const fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub const fn activity(&self) -> &ActivityTracker {
        &self.activity
    }

    /// Run `operation` until it succeeds or the retry budget is spent.
    ///
    /// The activity tracker is bumped once if the whole sequence is still
    /// unresolved after the busy threshold, and released once when it ends.
    pub async fn execute<T, F, Fut>(&self, label: &str, operation: F) -> Result<T, RemoteError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, RemoteError>>,
    {
        let attempts = self.run_attempts(label, operation);
        tokio::pin!(attempts);

        if let Ok(result) = tokio::time::timeout(self.policy.busy_threshold, &mut attempts).await {
            return result;
        }

        tracing::debug!(operation = label, "Remote operation is slow, showing activity");
        let _busy = self.activity.track();
        attempts.await
    }

    async fn run_attempts<T, F, Fut>(&self, label: &str, mut operation: F) -> Result<T, RemoteError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, RemoteError>>,
    {
        let mut delay = self.policy.initial_delay;
        let mut retries_left = self.policy.max_retries;
        let mut attempt = 1u32;

        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(error) if retries_left == 0 => {
                    tracing::error!(
                        operation = label,
                        attempt,
                        status = error.status(),
                        "Remote operation failed after all retries: {}",
                        error
                    );
                    return Err(error);
                }
                Err(error) => {
                    let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
                    tracing::warn!(
                        operation = label,
                        attempt,
                        delay_ms,
                        "Remote operation failed, retrying in {}ms: {}",
                        delay_ms,
                        error
                    );
                    self.frontend.notify(Notice::Retrying {
                        operation: label.to_string(),
                        attempt,
                        seconds: delay_ms.div_ceil(1000),
                    });

                    tokio::time::sleep(delay).await;
                    delay = delay.saturating_mul(2);
                    retries_left -= 1;
                    attempt += 1;
                }
            }
        }
    }
}
