//! Structured logging with tracing

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Error type for logging initialization
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid log filter directive: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => level_filter(&config.level)?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.format.as_str() {
        "pretty" => registry.with(fmt::layer().pretty()).try_init(),
        _ => registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init(),
    };

    result.map_err(|_| LoggingError::AlreadyInitialized)
}

fn level_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    Ok(EnvFilter::try_new(level)?)
}
