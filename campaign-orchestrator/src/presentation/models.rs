//! API request and response models

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Error response model
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error context
    pub details: Option<serde_json::Value>,

    /// Unique request identifier for tracking and support
    pub request_id: Uuid,

    /// Error occurrence timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Snapshot of the LLM rate limiter, for diagnostics
#[derive(Debug, Serialize)]
pub struct RateLimitStatusResponse {
    pub enabled: bool,
    pub capacity: u64,
    /// Tokens available at the time of the request
    pub available: u64,
    pub refill_interval_ms: u64,
    pub tokens_per_interval: u64,
}

/// Granted admission for a guarded LLM call
#[derive(Debug, Serialize)]
pub struct AdmissionResponse {
    pub admitted: bool,
    pub remaining: u64,
}
