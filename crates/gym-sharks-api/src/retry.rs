// ABOUTME: Retry policy with exponential backoff for backend calls
// ABOUTME: Queries retry transient failures three times, mutations once, 401s never
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

use gym_sharks_core::constants::retries::{
    INITIAL_BACKOFF_MS, MAX_BACKOFF_MS, MUTATION_MAX_RETRIES, QUERY_MAX_RETRIES,
};
use gym_sharks_core::errors::ApiResult;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

/// How often and how patiently a failed call is repeated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first one
    pub max_retries: u32,
    /// Delay before the first retry in milliseconds
    pub initial_backoff_ms: u64,
    /// Ceiling for the doubled delay in milliseconds
    pub max_backoff_ms: u64,
}

impl RetryPolicy {
    /// Policy for read queries
    #[must_use]
    pub const fn query() -> Self {
        Self {
            max_retries: QUERY_MAX_RETRIES,
            initial_backoff_ms: INITIAL_BACKOFF_MS,
            max_backoff_ms: MAX_BACKOFF_MS,
        }
    }

    /// Policy for mutations
    #[must_use]
    pub const fn mutation() -> Self {
        Self {
            max_retries: MUTATION_MAX_RETRIES,
            initial_backoff_ms: INITIAL_BACKOFF_MS,
            max_backoff_ms: MAX_BACKOFF_MS,
        }
    }

    /// Single attempt, no retries
    #[must_use]
    pub const fn none() -> Self {
        Self {
            max_retries: 0,
            initial_backoff_ms: 0,
            max_backoff_ms: 0,
        }
    }

    /// Same policy with a different retry budget
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Delay before retry number `attempt` (1-based), doubling each time
    #[must_use]
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 2_u64.saturating_pow(attempt.saturating_sub(1));
        let millis = self
            .initial_backoff_ms
            .saturating_mul(factor)
            .min(self.max_backoff_ms);
        Duration::from_millis(millis)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::query()
    }
}

/// Run `operation` until it succeeds, fails permanently, or the budget is spent
///
/// Only failures for which [`ApiError::is_retryable`] holds are repeated, so
/// an unauthorized response is returned after the first attempt.
///
/// [`ApiError::is_retryable`]: gym_sharks_core::errors::ApiError::is_retryable
///
/// # Errors
///
/// Returns the last error produced by `operation`
pub async fn with_retry<T, F, Fut>(policy: RetryPolicy, operation: &str, mut call: F) -> ApiResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ApiResult<T>>,
{
    let mut attempt = 0;
    loop {
        match call().await {
            Ok(value) => return Ok(value),
            Err(error) if error.is_retryable() && attempt < policy.max_retries => {
                attempt += 1;
                let delay = policy.backoff(attempt);
                warn!(
                    operation,
                    attempt,
                    max_retries = policy.max_retries,
                    backoff_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    error = %error,
                    "retrying backend call"
                );
                sleep(delay).await;
            }
            Err(error) => return Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gym_sharks_core::errors::ApiError;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_backoff_doubles_and_caps() {
        let policy = RetryPolicy {
            max_retries: 10,
            initial_backoff_ms: 500,
            max_backoff_ms: 3_000,
        };
        assert_eq!(policy.backoff(1), Duration::from_millis(500));
        assert_eq!(policy.backoff(2), Duration::from_millis(1_000));
        assert_eq!(policy.backoff(3), Duration::from_millis(2_000));
        assert_eq!(policy.backoff(4), Duration::from_millis(3_000));
        assert_eq!(policy.backoff(40), Duration::from_millis(3_000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_transient_failures_are_retried_up_to_budget() {
        let calls = AtomicU32::new(0);
        let result: ApiResult<()> = with_retry(RetryPolicy::query(), "list workouts", || {
            calls.fetch_add(1, Ordering::SeqCst);
            async {
                Err(ApiError::Server {
                    status: 503,
                    endpoint: "/home-workouts".into(),
                })
            }
        })
        .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1 + QUERY_MAX_RETRIES);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unauthorized_is_never_retried() {
        let calls = AtomicU32::new(0);
        let result: ApiResult<()> = with_retry(RetryPolicy::query(), "profile", || {
            calls.fetch_add(1, Ordering::SeqCst);
            async {
                Err(ApiError::Unauthorized {
                    endpoint: "/auth/profile".into(),
                    message: None,
                })
            }
        })
        .await;
        assert!(result.is_err_and(|error| error.is_unauthorized()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mutation_recovers_after_one_retry() {
        let calls = AtomicU32::new(0);
        let result = with_retry(RetryPolicy::mutation(), "subscribe", || {
            let attempt = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt == 0 {
                    Err(ApiError::Network {
                        endpoint: "/memberships/subscribe".into(),
                        reason: "connection reset".into(),
                    })
                } else {
                    Ok(attempt)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 1);
    }
}
