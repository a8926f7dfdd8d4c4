//! Blocking client for the remote decision service.

use std::sync::Arc;

use document_authz_sdk::{AuthorizationRequest, DocumentAuthZError};
use tracing::debug;
use url::Url;

use super::error::DomainError;
use super::uri::decision_uri;
use crate::config::{ConfigError, DocumentAuthZConfig};

/// Response body that grants access. Any other body denies it.
pub const ALLOW: &str = "ALLOW";

/// Client for the remote decision service.
///
/// Configuration is fixed at construction. Cloning is cheap and clones share
/// the transport; every call performs its own GET exchange.
#[derive(Debug, Clone)]
pub struct AuthorizationClient {
    config: Arc<DocumentAuthZConfig>,
    agent: ureq::Agent,
}

impl AuthorizationClient {
    /// Create a client for the decision service at `host:port` with the
    /// default timeout. No network activity happens here.
    ///
    /// # Errors
    ///
    /// - `ConfigError` if the host is empty or the port is `0`
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self, ConfigError> {
        Self::from_config(DocumentAuthZConfig::new(host, port))
    }

    /// Create a client from a full configuration.
    ///
    /// # Errors
    ///
    /// - `ConfigError` if [`DocumentAuthZConfig::validate`] fails
    pub fn from_config(config: DocumentAuthZConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let agent = ureq::AgentBuilder::new().timeout(config.timeout()).build();
        Ok(Self {
            config: Arc::new(config),
            agent,
        })
    }

    #[must_use]
    pub fn config(&self) -> &DocumentAuthZConfig {
        &self.config
    }

    /// Ask whether `user_id` may access `document_id`.
    ///
    /// Blocks the calling thread for the whole exchange.
    ///
    /// # Errors
    ///
    /// - `RequestFailed` if no decision could be obtained; a denial is `Ok(false)`
    pub fn request(&self, user_id: &str, document_id: &str) -> Result<bool, DocumentAuthZError> {
        self.decide(&AuthorizationRequest::new(user_id, document_id))
            .map_err(|e| log_and_convert("request", e))
    }

    #[tracing::instrument(skip_all, fields(host = %self.config.host, port = self.config.port))]
    pub(crate) fn decide(&self, request: &AuthorizationRequest) -> Result<bool, DomainError> {
        let uri = decision_uri(&self.config.host, self.config.port, request)?;
        let body = self.fetch(&uri)?;
        let granted = is_granted(&body);
        debug!(granted, "Received authorization decision");
        Ok(granted)
    }

    fn fetch(&self, uri: &Url) -> Result<String, DomainError> {
        // ureq only rejects >= 400; an unfollowed 3xx still arrives as `Ok`.
        let response = self.agent.request_url("GET", uri).call()?;
        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(DomainError::UnexpectedStatus { status });
        }
        response.into_string().map_err(DomainError::UnreadableBody)
    }
}

/// Decision rule: granted only for a body that is exactly `ALLOW` once
/// surrounding whitespace and control characters (every char up to U+0020)
/// are trimmed.
#[must_use]
pub fn is_granted(body: &str) -> bool {
    body.trim_matches(|c: char| c <= ' ') == ALLOW
}

pub(crate) fn log_and_convert(op: &str, e: DomainError) -> DocumentAuthZError {
    tracing::error!(operation = op, error = ?e, "document_authz call failed");
    e.into()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::net::TcpListener;

    use tracing_test::traced_test;

    use super::*;

    #[test]
    fn allow_is_granted() {
        assert!(is_granted("ALLOW"));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(is_granted("ALLOW\n"));
        assert!(is_granted("  ALLOW \r\n"));
        assert!(is_granted("\tALLOW"));
    }

    #[test]
    fn surrounding_control_characters_are_ignored() {
        assert!(is_granted("\0ALLOW\0"));
        assert!(is_granted("\u{1b}ALLOW\u{7}"));
        assert!(!is_granted("AL\0LOW"));
    }

    #[test]
    fn anything_else_is_denied() {
        for body in ["", "DENY", "allow", "Allow", "ALLOWED", "AL LOW", "ALLOW ALLOW"] {
            assert!(!is_granted(body), "body {body:?} must be denied");
        }
    }

    #[test]
    fn construction_validates_config() {
        assert_eq!(
            AuthorizationClient::new("", 8080).err(),
            Some(ConfigError::EmptyHost)
        );
        assert_eq!(
            AuthorizationClient::new("localhost", 0).err(),
            Some(ConfigError::InvalidPort { port: 0 })
        );
    }

    #[test]
    fn construction_keeps_config() {
        let client = AuthorizationClient::new("localhost", 8080).unwrap();

        assert_eq!(client.config(), &DocumentAuthZConfig::new("localhost", 8080));
    }

    #[test]
    #[traced_test]
    fn failed_request_is_logged() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = AuthorizationClient::new("127.0.0.1", port).unwrap();

        let result = client.request("u1", "d1");

        assert!(matches!(result, Err(DocumentAuthZError::RequestFailed(_))));
        assert!(logs_contain("document_authz call failed"));
    }

    #[test]
    fn invalid_host_surfaces_as_request_failed() {
        let client = AuthorizationClient::new("dpc/evil", 8080).unwrap();

        let err = client.request("u1", "d1").unwrap_err();

        let DocumentAuthZError::RequestFailed(cause) = &err;
        assert!(matches!(
            cause.downcast_ref::<DomainError>(),
            Some(DomainError::InvalidUri(_))
        ));
    }
}
