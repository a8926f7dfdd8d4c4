//! Configuration for the document `AuthZ` client.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentAuthZConfig {
    /// Host name of the remote decision service.
    pub host: String,

    /// Port the decision service listens on.
    pub port: u16,

    /// Upper bound for a whole decision exchange, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    10_000
}

/// Invalid client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("decision service host must not be empty")]
    EmptyHost,

    #[error("invalid decision service port: {port}")]
    InvalidPort { port: u16 },

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}

impl DocumentAuthZConfig {
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            timeout_ms: default_timeout_ms(),
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Check the configuration before a client is built from it.
    ///
    /// # Errors
    ///
    /// - `EmptyHost` if the host is empty or blank
    /// - `InvalidPort` for port `0`
    /// - `ZeroTimeout` if `timeout_ms` is `0`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidPort { port: self.port });
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}
