//! HTTP middleware for the web server

pub mod llm_rate_limit;

pub use llm_rate_limit::{LlmRateLimiterState, llm_rate_limit_middleware};
