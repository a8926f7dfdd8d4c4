//! Error types for the document `AuthZ` client.

use thiserror::Error;

/// Boxed cause carried by [`DocumentAuthZError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when asking for a document access decision.
///
/// There is a single category on purpose: callers distinguish "decision
/// obtained" from "decision could not be obtained", not the reason why.
/// The underlying cause stays reachable through [`std::error::Error::source`]
/// for diagnostics.
///
/// Access denial is expressed as `Ok(false)`, not as an error variant.
#[derive(Debug, Error)]
pub enum DocumentAuthZError {
    /// The decision could not be obtained from the remote service.
    #[error("authorization request failed")]
    RequestFailed(#[source] BoxError),
}

impl DocumentAuthZError {
    /// Wrap any underlying cause into the single failure category.
    #[must_use]
    pub fn request_failed(cause: impl Into<BoxError>) -> Self {
        Self::RequestFailed(cause.into())
    }
}
