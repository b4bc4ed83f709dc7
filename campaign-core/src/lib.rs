//! Campaign Core - Foundation crate for the Campaign OS admission gate
//!
//! # Modules
//!
//! - [`config`] — Strongly-typed configuration with TOML and environment variable support
//! - [`infrastructure`] — Token bucket rate limiter guarding LLM calls
//! - [`logging`] — Structured logging with tracing
//!
//! # Configuration
//!
//! ```rust,ignore
//! use campaign_core::Config;
//!
//! let config = Config::load()?;
//! ```
//!
//! Environment variables use the `CAMPAIGN_OS__` prefix with double underscore separators:
//!
//! ```bash
//! CAMPAIGN_OS__SERVER__PORT=3000
//! CAMPAIGN_OS__LLM__RATE_LIMIT__CAPACITY=20
//! ```
//!
//! # Rate limiting
//!
//! ```rust
//! use campaign_core::infrastructure::rate_limiter::RateLimiter;
//!
//! let limiter = RateLimiter::new(20, 10_000, 3).unwrap();
//! assert!(limiter.try_remove_token());
//! assert_eq!(limiter.available_tokens(), 19);
//! ```

pub mod config;
pub mod infrastructure;
pub mod logging;

pub use config::Config;
pub use logging::init_tracing;
