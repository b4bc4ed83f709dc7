//! Configuration validation module

use crate::config::{LlmRateLimitConfig, LoggingConfig, ServerConfig};

/// Trait for validating configuration sections
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Server configuration error: {message}")]
    Server { message: String },

    #[error("Logging configuration error: {message}")]
    Logging { message: String },

    #[error("Rate limit configuration error: {message}")]
    RateLimit { message: String },
}

impl ValidationError {
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }

    pub fn rate_limit(message: impl Into<String>) -> Self {
        Self::RateLimit {
            message: message.into(),
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // u16 cannot exceed 65535, so only 0 needs rejecting
        if self.port == 0 {
            return Err(ValidationError::server(format!(
                "Port must be in range 1-65535, got {}",
                self.port
            )));
        }

        if self.host.is_empty() {
            return Err(ValidationError::server("Host cannot be empty"));
        }

        if self.request_timeout_seconds == 0 {
            return Err(ValidationError::server(
                "Request timeout must be greater than 0",
            ));
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.level.trim().is_empty() {
            return Err(ValidationError::logging("Log level cannot be empty"));
        }

        match self.format.as_str() {
            "json" | "pretty" => Ok(()),
            other => Err(ValidationError::logging(format!(
                "Log format must be \"json\" or \"pretty\", got: {}",
                other
            ))),
        }
    }
}

impl Validate for LlmRateLimitConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.capacity == 0 {
            return Err(ValidationError::rate_limit(
                "LLM rate limit capacity must be greater than 0",
            ));
        }

        if self.refill_interval_ms == 0 {
            return Err(ValidationError::rate_limit(
                "LLM rate limit refill_interval_ms must be greater than 0",
            ));
        }

        if self.tokens_per_interval == 0 {
            return Err(ValidationError::rate_limit(
                "LLM rate limit tokens_per_interval must be greater than 0",
            ));
        }

        if self.tokens_per_interval > self.capacity {
            tracing::warn!(
                capacity = self.capacity,
                tokens_per_interval = self.tokens_per_interval,
                "LLM rate limit refills more tokens per interval than the bucket holds"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_validation() {
        let valid = ServerConfig::default();
        assert!(valid.validate().is_ok());

        let invalid = ServerConfig {
            port: 0,
            ..valid.clone()
        };
        assert!(invalid.validate().is_err());

        let invalid = ServerConfig {
            request_timeout_seconds: 0,
            ..valid.clone()
        };
        assert!(invalid.validate().is_err());

        let invalid = ServerConfig {
            host: String::new(),
            ..valid
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_logging_config_validation() {
        assert!(LoggingConfig::default().validate().is_ok());

        let pretty = LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        };
        assert!(pretty.validate().is_ok());

        let invalid = LoggingConfig {
            level: "info".to_string(),
            format: "xml".to_string(),
        };
        assert!(matches!(
            invalid.validate(),
            Err(ValidationError::Logging { .. })
        ));

        let invalid = LoggingConfig {
            level: "  ".to_string(),
            format: "json".to_string(),
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_rate_limit_config_validation() {
        let valid = LlmRateLimitConfig::default();
        assert!(valid.validate().is_ok());

        for invalid in [
            LlmRateLimitConfig {
                capacity: 0,
                ..valid.clone()
            },
            LlmRateLimitConfig {
                refill_interval_ms: 0,
                ..valid.clone()
            },
            LlmRateLimitConfig {
                tokens_per_interval: 0,
                ..valid.clone()
            },
        ] {
            assert!(matches!(
                invalid.validate(),
                Err(ValidationError::RateLimit { .. })
            ));
        }

        // Rate above capacity is unusual but allowed
        let oversized_rate = LlmRateLimitConfig {
            capacity: 2,
            tokens_per_interval: 5,
            ..valid
        };
        assert!(oversized_rate.validate().is_ok());
    }
}
