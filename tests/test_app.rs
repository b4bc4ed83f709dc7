//! Application wiring tests

use axum::{
    body::Body,
    extract::Request,
    http::{Method, StatusCode},
};
use tower::ServiceExt;

use campaign_os::campaign_core::config::{Config, LlmRateLimitConfig};
use campaign_os::create_app;

fn config_with_limit(capacity: u64, enabled: bool) -> Config {
    let mut config = Config::default();
    config.llm.rate_limit = LlmRateLimitConfig {
        enabled,
        capacity,
        refill_interval_ms: 60_000,
        tokens_per_interval: 1,
    };
    config
}

fn admission_request() -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/v1/llm/admission")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_router_shares_one_bucket() {
    let app = create_app(config_with_limit(2, true)).unwrap();

    for _ in 0..2 {
        let response = app.router.clone().oneshot(admission_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.router.clone().oneshot(admission_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    // The handle exposes the same bucket the router spends from
    assert_eq!(app.llm_rate_limiter.available_tokens(), 0);
}

#[tokio::test]
async fn test_disabled_rate_limit_keeps_bucket_full() {
    let app = create_app(config_with_limit(1, false)).unwrap();

    for _ in 0..3 {
        let response = app.router.clone().oneshot(admission_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
    assert_eq!(app.llm_rate_limiter.available_tokens(), 1);
}

#[tokio::test]
async fn test_invalid_bucket_config_fails_startup() {
    let mut config = Config::default();
    config.llm.rate_limit.refill_interval_ms = 0;

    let err = create_app(config).err().expect("zero interval must be rejected");
    assert!(err.to_string().contains("refill_interval_ms"));
}

#[tokio::test]
async fn test_health_route() {
    let app = create_app(Config::default()).unwrap();

    let response = app
        .router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}
