use axum::{
    extract::{Request, State},
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use campaign_core::config::LlmRateLimitConfig;
use campaign_core::infrastructure::rate_limiter::{RateLimiter, RateLimiterError};

use crate::presentation::models::ErrorResponse;

pub const LIMIT_HEADER: &str = "x-llm-ratelimit-limit";
pub const REMAINING_HEADER: &str = "x-llm-ratelimit-remaining";

/// LLM rate limiter state (one bucket shared across requests)
#[derive(Debug, Clone)]
pub struct LlmRateLimiterState {
    limiter: Arc<RateLimiter>,
    enabled: bool,
}

impl LlmRateLimiterState {
    pub fn new(limiter: Arc<RateLimiter>, enabled: bool) -> Self {
        Self { limiter, enabled }
    }

    /// Build the shared bucket from configuration
    pub fn from_config(config: &LlmRateLimitConfig) -> Result<Self, RateLimiterError> {
        let limiter = RateLimiter::from_config(config)?;
        Ok(Self::new(Arc::new(limiter), config.enabled))
    }

    pub fn limiter(&self) -> &Arc<RateLimiter> {
        &self.limiter
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// LLM rate limiting middleware
///
/// Spends one token per request. An empty bucket answers 429 immediately;
/// there is no queueing and no retry-after estimate.
pub async fn llm_rate_limit_middleware(
    State(state): State<LlmRateLimiterState>,
    request: Request,
    next: Next,
) -> Response {
    if !state.enabled {
        return next.run(request).await;
    }

    let limit = state.limiter.capacity();

    if state.limiter.try_remove_token() {
        let remaining = state.limiter.available_tokens();
        let mut response = next.run(request).await;

        let headers = response.headers_mut();
        headers.insert(LIMIT_HEADER, HeaderValue::from(limit));
        headers.insert(REMAINING_HEADER, HeaderValue::from(remaining));

        return response;
    }

    let remaining = state.limiter.available_tokens();
    tracing::warn!(
        method = %request.method(),
        path = %request.uri().path(),
        limit,
        remaining,
        "LLM rate limit exceeded"
    );

    let mut response = (
        StatusCode::TOO_MANY_REQUESTS,
        axum::Json(ErrorResponse {
            code: "LLM_RATE_LIMIT_EXCEEDED".to_string(),
            message: "Rate limit exceeded. Please try again later.".to_string(),
            details: Some(serde_json::json!({
                "limit": limit,
                "remaining": remaining,
            })),
            request_id: Uuid::new_v4(),
            timestamp: Utc::now(),
        }),
    )
        .into_response();

    let headers = response.headers_mut();
    headers.insert(LIMIT_HEADER, HeaderValue::from(limit));
    headers.insert(REMAINING_HEADER, HeaderValue::from(remaining));

    response
}
