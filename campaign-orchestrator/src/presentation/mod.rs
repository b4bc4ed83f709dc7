//! Presentation layer

pub mod controllers;
pub mod middleware;
pub mod models;
pub mod routes;

pub use middleware::{LlmRateLimiterState, llm_rate_limit_middleware};
pub use models::*;
pub use routes::{create_router, guard_llm_routes};
