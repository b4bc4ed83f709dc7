//! Rate Limiting Infrastructure
//!
//! Token bucket admission gate for expensive downstream calls (LLM requests):
//! - Lazy refill on every check, no background timer
//! - Partial refill intervals carry over between checks
//! - Pluggable clock for deterministic tests
//! - Mutex-guarded shared limiter for concurrent request handlers

pub mod clock;
pub mod service;
pub mod token_bucket;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use service::RateLimiter;
pub use token_bucket::TokenBucket;
pub use types::{BucketParams, RateLimiterError};
