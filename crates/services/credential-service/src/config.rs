//! Credential service configuration.

use common::{AppResult, HasherConfig, LogConfig};

/// Credential service configuration.
#[derive(Debug, Clone, Default)]
pub struct CredentialServiceConfig {
    /// Tracing filter and output format
    pub log: LogConfig,
    /// Blocking pool sizing for bcrypt work
    pub hasher: HasherConfig,
}

impl CredentialServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            log: LogConfig::from_env(),
            hasher: HasherConfig::from_env()?,
        })
    }
}
