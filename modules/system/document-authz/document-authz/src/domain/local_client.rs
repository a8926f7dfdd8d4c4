//! Local (in-process) async client for document authorization.

use async_trait::async_trait;
use document_authz_sdk::{AuthorizationRequest, DocumentAuthZClient, DocumentAuthZError};
use tokio_util::sync::CancellationToken;

use super::error::DomainError;
use super::service::{AuthorizationClient, log_and_convert};

/// Async adapter over [`AuthorizationClient`].
///
/// Each decision runs on the runtime's blocking pool. Once `cancel` fires,
/// pending and later calls fail with `RequestFailed` instead of waiting for
/// the remote service.
pub struct DocumentAuthZLocalClient {
    client: AuthorizationClient,
    cancel: CancellationToken,
}

impl DocumentAuthZLocalClient {
    #[must_use]
    pub fn new(client: AuthorizationClient, cancel: CancellationToken) -> Self {
        Self { client, cancel }
    }

    async fn decide(&self, request: AuthorizationRequest) -> Result<bool, DomainError> {
        if self.cancel.is_cancelled() {
            return Err(DomainError::Cancelled);
        }

        let client = self.client.clone();
        let task = tokio::task::spawn_blocking(move || client.decide(&request));

        tokio::select! {
            () = self.cancel.cancelled() => Err(DomainError::Cancelled),
            joined = task => match joined {
                Ok(decision) => decision,
                Err(e) => Err(DomainError::TaskFailed(e)),
            },
        }
    }
}

#[async_trait]
impl DocumentAuthZClient for DocumentAuthZLocalClient {
    async fn is_authorized(
        &self,
        request: AuthorizationRequest,
    ) -> Result<bool, DocumentAuthZError> {
        self.decide(request)
            .await
            .map_err(|e| log_and_convert("is_authorized", e))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn local_client(cancel: CancellationToken) -> DocumentAuthZLocalClient {
        DocumentAuthZLocalClient::new(AuthorizationClient::new("127.0.0.1", 9).unwrap(), cancel)
    }

    #[tokio::test]
    async fn cancelled_before_call_fails_without_network() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let client = local_client(cancel);

        let err = client
            .decide(AuthorizationRequest::new("u1", "d1"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Cancelled));
    }

    #[tokio::test]
    async fn cancellation_maps_to_request_failed() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let plugin: &dyn DocumentAuthZClient = &local_client(cancel);

        let result = plugin
            .is_authorized(AuthorizationRequest::new("u1", "d1"))
            .await;

        assert!(matches!(result, Err(DocumentAuthZError::RequestFailed(_))));
    }
}
