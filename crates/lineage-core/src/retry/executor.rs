//! Retry loop

use std::fmt;
use std::future::Future;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::types::RetryPolicy;

use super::error::RetryError;
use super::sleeper::{Sleeper, TokioSleeper};

/// Runs an operation until it succeeds, fails permanently or runs out of
/// attempts
///
/// # Example
///
/// ```rust
/// use lineage_core::retry::{RecordingSleeper, RetryExecutor};
/// use lineage_core::types::RetryPolicy;
///
/// let executor = RetryExecutor::new("entity-tags", RetryPolicy::default())
///     .with_sleeper(RecordingSleeper::new());
/// assert_eq!(executor.operation(), "entity-tags");
/// ```
pub struct RetryExecutor<S = TokioSleeper> {
    operation: String,
    policy: RetryPolicy,
    sleeper: S,
}

impl RetryExecutor {
    /// Create an executor that waits on the tokio timer
    pub fn new(operation: impl Into<String>, policy: RetryPolicy) -> Self {
        Self {
            operation: operation.into(),
            policy,
            sleeper: TokioSleeper,
        }
    }
}

impl<S: Sleeper> RetryExecutor<S> {
    /// Replace the sleeper used between attempts
    pub fn with_sleeper<S2: Sleeper>(self, sleeper: S2) -> RetryExecutor<S2> {
        RetryExecutor {
            operation: self.operation,
            policy: self.policy,
            sleeper,
        }
    }

    /// Name used in log events
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Run `op` until it succeeds
    ///
    /// `op` is invoked at most `policy.max_attempts` times, and at least
    /// once even when the policy allows none. An error for which `retry_if`
    /// returns false ends the loop immediately. There is no wait after the
    /// final attempt.
    pub async fn execute<F, Fut, T, E, R>(&self, mut op: F, retry_if: R) -> Result<T, RetryError<E>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: fmt::Display,
        R: Fn(&E) -> bool,
    {
        let max_attempts = self.policy.max_attempts.max(1);
        let start = Instant::now();
        let mut attempt = 1;

        loop {
            debug!(
                operation = %self.operation,
                attempt,
                max_attempts,
                "starting attempt"
            );

            let err = match op().await {
                Ok(value) => {
                    let elapsed_ms = start.elapsed().as_millis() as u64;
                    if attempt > 1 {
                        info!(operation = %self.operation, attempt, elapsed_ms, "succeeded after retry");
                    } else {
                        debug!(operation = %self.operation, elapsed_ms, "succeeded on first attempt");
                    }
                    return Ok(value);
                }
                Err(err) => err,
            };

            if !retry_if(&err) {
                warn!(operation = %self.operation, attempt, error = %err, "failure is not retryable");
                return Err(RetryError::NonRetryable {
                    attempt,
                    source: err,
                });
            }

            if attempt >= max_attempts {
                warn!(
                    operation = %self.operation,
                    attempts = attempt,
                    error = %err,
                    "all retry attempts exhausted"
                );
                return Err(RetryError::Exhausted {
                    attempts: attempt,
                    source: err,
                });
            }

            let delay = self.policy.delay_after(attempt);
            warn!(
                operation = %self.operation,
                attempt,
                error = %err,
                delay_ms = delay.as_millis() as u64,
                "attempt failed, will retry"
            );

            if !delay.is_zero() {
                self.sleeper.sleep(delay).await;
            }
            attempt += 1;
        }
    }
}
