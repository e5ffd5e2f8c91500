//! Shared configuration structures.

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default cap on tokio's blocking pool, which runs every bcrypt call
pub const DEFAULT_MAX_BLOCKING_THREADS: usize = 8;

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// `EnvFilter` directives, e.g. "info,domain=debug"
    pub filter: String,
    /// Emit JSON lines instead of human-readable text
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            json: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            filter: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
            json: env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }
}

/// Hashing worker pool configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HasherConfig {
    /// Upper bound on concurrent bcrypt computations
    pub max_blocking_threads: usize,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            max_blocking_threads: DEFAULT_MAX_BLOCKING_THREADS,
        }
    }
}

impl HasherConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns a config error if `HASH_MAX_BLOCKING_THREADS` is set but is not
    /// a positive integer.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        match env::var("HASH_MAX_BLOCKING_THREADS") {
            Ok(raw) => Self::parse_threads(&raw).map(|max_blocking_threads| Self {
                max_blocking_threads,
            }),
            Err(_) => Ok(Self::default()),
        }
    }

    fn parse_threads(raw: &str) -> AppResult<usize> {
        match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(AppError::config(format!(
                "HASH_MAX_BLOCKING_THREADS must be a positive integer, got {:?}",
                raw
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(LogConfig::default().filter, "info");
        assert!(!LogConfig::default().json);
        assert_eq!(HasherConfig::default().max_blocking_threads, 8);
    }

    #[test]
    fn test_parse_threads() {
        assert_eq!(HasherConfig::parse_threads("4").unwrap(), 4);
        assert_eq!(HasherConfig::parse_threads(" 16 ").unwrap(), 16);
        assert!(HasherConfig::parse_threads("0").is_err());
        assert!(HasherConfig::parse_threads("many").is_err());
    }
}
