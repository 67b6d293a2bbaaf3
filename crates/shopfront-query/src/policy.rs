//! Per-query cache policies.

use std::time::Duration;

use crate::retry::RetryPolicy;

/// Cache policy for one logical query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPolicy {
    /// How long a fetched result is served from cache without re-fetching.
    pub stale_time: Duration,
    /// How long an unused entry is kept before eviction.
    pub gc_time: Duration,
    /// Retry policy applied by the fetch driver.
    pub retry: RetryPolicy,
}

impl QueryPolicy {
    pub fn new(stale_time: Duration, gc_time: Duration) -> Self {
        Self {
            stale_time,
            gc_time,
            retry: RetryPolicy::none(),
        }
    }

    /// Policy for incremental search queries: short staleness window, up to
    /// two retries.
    pub fn search() -> Self {
        Self {
            stale_time: Duration::from_secs(2 * 60),
            gc_time: Duration::from_secs(5 * 60),
            retry: RetryPolicy::new(2),
        }
    }

    /// Policy for catalog listings: longer staleness window, no retries.
    pub fn listing() -> Self {
        Self {
            stale_time: Duration::from_secs(5 * 60),
            gc_time: Duration::from_secs(10 * 60),
            retry: RetryPolicy::none(),
        }
    }

    /// Set the retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}
