//! Route definitions and server setup

use axum::http::StatusCode;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use campaign_core::config::ServerConfig;

use crate::presentation::controllers::{health_check, rate_limit_status, request_admission};
use crate::presentation::middleware::{LlmRateLimiterState, llm_rate_limit_middleware};

/// Put every route of `router` behind the LLM token bucket
///
/// Only routes already added to `router` are guarded.
pub fn guard_llm_routes<S>(router: Router<S>, state: LlmRateLimiterState) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.route_layer(middleware::from_fn_with_state(
        state,
        llm_rate_limit_middleware,
    ))
}

/// Create the application router
pub fn create_router(state: LlmRateLimiterState, server: &ServerConfig) -> Router {
    let guarded_llm_routes = guard_llm_routes(
        Router::new().route("/admission", post(request_admission)),
        state.clone(),
    );

    let llm_routes = Router::new()
        .route("/rate-limit", get(rate_limit_status))
        .merge(guarded_llm_routes);

    let api_routes = Router::new().nest("/llm", llm_routes);

    let health_routes = Router::new().route("/health", get(health_check));

    let service_builder = ServiceBuilder::new()
        // HTTP tracing
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(server.request_timeout_seconds),
        ));

    Router::new()
        .nest("/api/v1", api_routes)
        .merge(health_routes)
        .layer(service_builder)
        .with_state(state)
}
