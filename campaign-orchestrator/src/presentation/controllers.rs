//! HTTP controllers

use axum::{Json, extract::State};
use chrono::Utc;

use crate::presentation::middleware::LlmRateLimiterState;
use crate::presentation::models::{AdmissionResponse, HealthResponse, RateLimitStatusResponse};

/// GET /health - Liveness check
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

/// GET /api/v1/llm/rate-limit - Current bucket state
///
/// Not guarded: reading the bucket never spends a token.
pub async fn rate_limit_status(
    State(state): State<LlmRateLimiterState>,
) -> Json<RateLimitStatusResponse> {
    let limiter = state.limiter();
    let params = limiter.params();

    Json(RateLimitStatusResponse {
        enabled: state.is_enabled(),
        capacity: params.capacity,
        available: limiter.available_tokens(),
        refill_interval_ms: params.refill_interval_ms,
        tokens_per_interval: params.tokens_per_interval,
    })
}

/// POST /api/v1/llm/admission - Pre-flight admission for an LLM call
///
/// Runs behind the LLM rate limit middleware, so reaching this handler means
/// the token was already granted.
pub async fn request_admission(
    State(state): State<LlmRateLimiterState>,
) -> Json<AdmissionResponse> {
    Json(AdmissionResponse {
        admitted: true,
        remaining: state.limiter().available_tokens(),
    })
}
