//! Domain models for the document `AuthZ` client.

use serde::{Deserialize, Serialize};

/// Identifier of this system as known to the remote decision service.
///
/// Sent as the `systemId` query parameter of every decision request.
pub const CALLING_SYSTEM_ID: &str = "42";

/// Document access decision request.
///
/// Both identifiers are opaque to the client: any string is accepted and
/// encoded for transport as needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationRequest {
    /// The user who attempts the access.
    pub user_id: String,
    /// The document the user tries to access.
    pub document_id: String,
}

impl AuthorizationRequest {
    #[must_use]
    pub fn new(user_id: impl Into<String>, document_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            document_id: document_id.into(),
        }
    }

    /// Query parameters of the decision request, in wire order.
    #[must_use]
    pub fn query_pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("systemId", CALLING_SYSTEM_ID),
            ("userId", self.user_id.as_str()),
            ("documentId", self.document_id.as_str()),
        ]
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_start_with_calling_system() {
        let request = AuthorizationRequest::new("u1", "d1");

        assert_eq!(
            request.query_pairs(),
            [("systemId", "42"), ("userId", "u1"), ("documentId", "d1")]
        );
    }

    #[test]
    fn identifiers_are_kept_verbatim() {
        let request = AuthorizationRequest::new("a b&c", "");

        assert_eq!(request.user_id, "a b&c");
        assert!(request.document_id.is_empty());
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let request = AuthorizationRequest::new("u1", "d1");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "user_id": "u1", "document_id": "d1" })
        );
    }
}
