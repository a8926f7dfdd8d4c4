//! Public API trait for document authorization.

use async_trait::async_trait;

use crate::error::DocumentAuthZError;
use crate::models::AuthorizationRequest;

/// Public API trait for the document `AuthZ` client.
///
/// The surrounding authorization system holds this as
/// `Arc<dyn DocumentAuthZClient>` and asks it for a decision per access:
///
/// ```ignore
/// let granted = authz.is_authorized(AuthorizationRequest::new(user, doc)).await?;
/// ```
#[async_trait]
pub trait DocumentAuthZClient: Send + Sync {
    /// Ask the remote decision service whether the user may access the document.
    ///
    /// Returns `Ok(true)` when access is granted and `Ok(false)` when it is denied.
    ///
    /// # Errors
    ///
    /// - `RequestFailed` if no decision could be obtained (transport failure,
    ///   unexpected status, unreadable response, cancellation)
    async fn is_authorized(
        &self,
        request: AuthorizationRequest,
    ) -> Result<bool, DocumentAuthZError>;
}
