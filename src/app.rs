//! Application setup and wiring

use std::sync::Arc;
use std::time::Instant;

use axum::Router;

use campaign_core::Config;
use campaign_core::infrastructure::rate_limiter::RateLimiter;
use campaign_orchestrator::presentation::{LlmRateLimiterState, create_router};

/// Handle returned from create_app
pub struct AppHandle {
    pub router: Router,
    /// The process-wide LLM bucket, shared with the router
    pub llm_rate_limiter: Arc<RateLimiter>,
}

/// Build the application router
///
/// The LLM bucket is created here exactly once and injected into every
/// handler that needs it.
pub fn create_app(config: Config) -> Result<AppHandle, Box<dyn std::error::Error + Send + Sync>> {
    let startup_time = Instant::now();

    let rate_limit_config = &config.llm.rate_limit;
    let llm_rate_limiter = Arc::new(RateLimiter::from_config(rate_limit_config)?);

    if rate_limit_config.enabled {
        tracing::info!(
            capacity = rate_limit_config.capacity,
            refill_interval_ms = rate_limit_config.refill_interval_ms,
            tokens_per_interval = rate_limit_config.tokens_per_interval,
            "LLM rate limiting enabled"
        );
    } else {
        tracing::warn!("LLM rate limiting disabled; guarded routes are unthrottled");
    }

    let state = LlmRateLimiterState::new(llm_rate_limiter.clone(), rate_limit_config.enabled);
    let router = create_router(state, &config.server);

    tracing::info!(
        elapsed_ms = startup_time.elapsed().as_millis() as u64,
        "Application initialized"
    );

    Ok(AppHandle {
        router,
        llm_rate_limiter,
    })
}
