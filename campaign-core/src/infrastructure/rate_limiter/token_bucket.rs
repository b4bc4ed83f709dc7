//! Token Bucket Rate Limiter
//!
//! Implements the token bucket algorithm with lazy refill. There is no
//! background timer: every observation first credits the whole refill
//! intervals that elapsed since the last refill, then answers.
//!
//! Only whole intervals are credited, and `last_refill` advances by exactly
//! those intervals, so a partial interval carries over to the next call
//! instead of being dropped.

use super::types::{BucketParams, RateLimiterError};

/// Single-owner token bucket
///
/// Callers pass the current instant in milliseconds. See
/// [`RateLimiter`](super::RateLimiter) for the shared, clock-driven wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBucket {
    capacity: u64,
    tokens: u64,
    refill_interval_ms: u64,
    tokens_per_interval: u64,
    last_refill: u64,
}

impl TokenBucket {
    /// Create a full bucket
    ///
    /// A fresh bucket allows a full burst immediately.
    pub fn new(params: BucketParams, now_millis: u64) -> Result<Self, RateLimiterError> {
        params.validate()?;

        Ok(Self {
            capacity: params.capacity,
            tokens: params.capacity,
            refill_interval_ms: params.refill_interval_ms,
            tokens_per_interval: params.tokens_per_interval,
            last_refill: now_millis,
        })
    }

    /// Credit the whole intervals elapsed since the last refill
    pub fn refill(&mut self, now_millis: u64) {
        // A clock that stepped backwards reads as no elapsed time
        let elapsed = now_millis.saturating_sub(self.last_refill);
        if elapsed < self.refill_interval_ms {
            return;
        }

        let cycles = elapsed / self.refill_interval_ms;
        let added = cycles.saturating_mul(self.tokens_per_interval);
        self.tokens = self.tokens.saturating_add(added).min(self.capacity);
        // cycles * interval <= elapsed, so this cannot overflow
        self.last_refill += cycles * self.refill_interval_ms;
    }

    /// Admission check: take `count` tokens, or none at all
    pub fn try_remove_tokens(&mut self, count: u64, now_millis: u64) -> bool {
        self.refill(now_millis);

        if self.tokens < count {
            return false;
        }

        self.tokens -= count;
        true
    }

    /// Current token count after refill
    pub fn available_tokens(&mut self, now_millis: u64) -> u64 {
        self.refill(now_millis);
        self.tokens
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn refill_interval_ms(&self) -> u64 {
        self.refill_interval_ms
    }

    pub fn tokens_per_interval(&self) -> u64 {
        self.tokens_per_interval
    }

    /// Instant up to which refills have been credited
    pub fn last_refill(&self) -> u64 {
        self.last_refill
    }

    pub fn params(&self) -> BucketParams {
        BucketParams::new(
            self.capacity,
            self.refill_interval_ms,
            self.tokens_per_interval,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: u64 = 1_700_000_000_000;

    fn bucket(capacity: u64, interval: u64, rate: u64) -> TokenBucket {
        TokenBucket::new(BucketParams::new(capacity, interval, rate), T0).unwrap()
    }

    #[test]
    fn test_new_bucket_starts_full() {
        let mut b = bucket(5, 1_000, 1);
        assert_eq!(b.available_tokens(T0), 5);
        assert_eq!(b.last_refill(), T0);
    }

    #[test]
    fn test_new_rejects_zero_params() {
        assert!(TokenBucket::new(BucketParams::new(0, 1_000, 1), T0).is_err());
        assert!(TokenBucket::new(BucketParams::new(5, 0, 1), T0).is_err());
        assert!(TokenBucket::new(BucketParams::new(5, 1_000, 0), T0).is_err());
    }

    #[test]
    fn test_refill_advances_by_whole_intervals_only() {
        let mut b = bucket(10, 1_000, 2);
        assert!(b.try_remove_tokens(10, T0));

        b.refill(T0 + 2_500);
        assert_eq!(b.available_tokens(T0 + 2_500), 4);
        assert_eq!(b.last_refill(), T0 + 2_000);
    }

    #[test]
    fn test_refill_before_interval_is_noop() {
        let mut b = bucket(10, 1_000, 2);
        assert!(b.try_remove_tokens(3, T0));

        b.refill(T0 + 999);
        assert_eq!(b.last_refill(), T0);
        assert_eq!(b.available_tokens(T0 + 999), 7);
    }

    #[test]
    fn test_rejection_leaves_state_unchanged() {
        let mut b = bucket(3, 1_000, 1);
        assert!(b.try_remove_tokens(2, T0));

        let before = b.clone();
        assert!(!b.try_remove_tokens(2, T0));
        assert_eq!(b, before);
    }

    #[test]
    fn test_zero_count_always_admitted() {
        let mut b = bucket(1, 1_000, 1);
        assert!(b.try_remove_tokens(1, T0));
        assert!(b.try_remove_tokens(0, T0));
        assert_eq!(b.available_tokens(T0), 0);
    }

    #[test]
    fn test_clock_moving_backwards() {
        let mut b = bucket(4, 1_000, 1);
        assert!(b.try_remove_tokens(4, T0));

        assert_eq!(b.available_tokens(T0 - 5_000), 0);
        assert_eq!(b.last_refill(), T0);

        assert_eq!(b.available_tokens(T0 + 1_000), 1);
    }

    #[test]
    fn test_rate_above_capacity_is_capped() {
        let mut b = bucket(2, 1_000, 5);
        assert!(b.try_remove_tokens(2, T0));
        assert_eq!(b.available_tokens(T0 + 1_000), 2);
    }

    #[test]
    fn test_huge_idle_period_does_not_overflow() {
        let mut b = bucket(u64::MAX, 1, u64::MAX);
        assert!(b.try_remove_tokens(u64::MAX, 0));
        assert_eq!(b.available_tokens(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_params_roundtrip() {
        let b = bucket(20, 10_000, 3);
        assert_eq!(b.params(), BucketParams::new(20, 10_000, 3));
        assert_eq!(b.capacity(), 20);
        assert_eq!(b.refill_interval_ms(), 10_000);
        assert_eq!(b.tokens_per_interval(), 3);
    }
}
