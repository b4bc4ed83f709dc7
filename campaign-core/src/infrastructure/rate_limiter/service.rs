//! Rate Limiter Service
//!
//! Shared admission gate for an expensive downstream call. One instance is
//! built at startup per guarded resource and handed to request handlers
//! behind an `Arc`.
//!
//! Refill and decrement run under one lock, so concurrent callers can never
//! both spend the same token.

use super::clock::{Clock, SystemClock};
use super::token_bucket::TokenBucket;
use super::types::{BucketParams, RateLimiterError};
use crate::config::LlmRateLimitConfig;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, trace};

/// Thread-safe token bucket rate limiter
pub struct RateLimiter {
    bucket: Mutex<TokenBucket>,
    clock: Arc<dyn Clock>,
}

impl RateLimiter {
    /// Create a rate limiter driven by the wall clock
    pub fn new(
        capacity: u64,
        refill_interval_ms: u64,
        tokens_per_interval: u64,
    ) -> Result<Self, RateLimiterError> {
        Self::with_clock(
            BucketParams::new(capacity, refill_interval_ms, tokens_per_interval),
            Arc::new(SystemClock),
        )
    }

    /// Create a rate limiter with a custom time source (for testing)
    pub fn with_clock(
        params: BucketParams,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, RateLimiterError> {
        let bucket = TokenBucket::new(params, clock.now_millis())?;

        debug!(
            capacity = params.capacity,
            refill_interval_ms = params.refill_interval_ms,
            tokens_per_interval = params.tokens_per_interval,
            "Rate limiter created"
        );

        Ok(Self {
            bucket: Mutex::new(bucket),
            clock,
        })
    }

    /// Create a wall-clock rate limiter from configuration
    pub fn from_config(config: &LlmRateLimitConfig) -> Result<Self, RateLimiterError> {
        Self::with_clock(BucketParams::from(config), Arc::new(SystemClock))
    }

    /// Try to take `count` tokens
    ///
    /// Returns `false` without consuming anything when fewer than `count`
    /// tokens are available. The caller decides how to surface the rejection;
    /// nothing is queued or retried here.
    pub fn try_remove_tokens(&self, count: u64) -> bool {
        let mut bucket = self.bucket.lock();
        let now = self.clock.now_millis();

        if bucket.try_remove_tokens(count, now) {
            trace!(
                count,
                remaining = bucket.available_tokens(now),
                "Tokens removed"
            );
            true
        } else {
            debug!(
                requested = count,
                available = bucket.available_tokens(now),
                "Rate limit admission rejected"
            );
            false
        }
    }

    /// Try to take a single token
    pub fn try_remove_token(&self) -> bool {
        self.try_remove_tokens(1)
    }

    /// Tokens available right now, after refill
    pub fn available_tokens(&self) -> u64 {
        let now = self.clock.now_millis();
        self.bucket.lock().available_tokens(now)
    }

    pub fn capacity(&self) -> u64 {
        self.bucket.lock().capacity()
    }

    pub fn params(&self) -> BucketParams {
        self.bucket.lock().params()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("bucket", &*self.bucket.lock())
            .finish_non_exhaustive()
    }
}
