//! Rate limiter types and core data structures

use serde::{Deserialize, Serialize};

use crate::config::LlmRateLimitConfig;

/// Construction parameters for a token bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketParams {
    /// Maximum number of tokens the bucket can hold
    pub capacity: u64,
    /// Duration of one refill cycle in milliseconds
    pub refill_interval_ms: u64,
    /// Tokens granted per elapsed whole interval
    pub tokens_per_interval: u64,
}

impl BucketParams {
    pub fn new(capacity: u64, refill_interval_ms: u64, tokens_per_interval: u64) -> Self {
        Self {
            capacity,
            refill_interval_ms,
            tokens_per_interval,
        }
    }

    /// Reject any zero parameter.
    ///
    /// A zero interval would divide by zero during refill, and a zero capacity
    /// or rate yields a bucket that can never admit anything.
    pub fn validate(&self) -> Result<(), RateLimiterError> {
        if self.capacity == 0 {
            return Err(RateLimiterError::invalid("capacity", self.capacity));
        }
        if self.refill_interval_ms == 0 {
            return Err(RateLimiterError::invalid(
                "refill_interval_ms",
                self.refill_interval_ms,
            ));
        }
        if self.tokens_per_interval == 0 {
            return Err(RateLimiterError::invalid(
                "tokens_per_interval",
                self.tokens_per_interval,
            ));
        }
        Ok(())
    }
}

impl From<&LlmRateLimitConfig> for BucketParams {
    fn from(config: &LlmRateLimitConfig) -> Self {
        Self::new(
            config.capacity,
            config.refill_interval_ms,
            config.tokens_per_interval,
        )
    }
}

/// Errors raised while building a rate limiter
///
/// Admission checks themselves never fail; only construction does.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RateLimiterError {
    #[error("Invalid rate limiter parameter `{name}`: must be greater than 0, got {value}")]
    InvalidParameter { name: &'static str, value: u64 },
}

impl RateLimiterError {
    pub fn invalid(name: &'static str, value: u64) -> Self {
        Self::InvalidParameter { name, value }
    }
}
