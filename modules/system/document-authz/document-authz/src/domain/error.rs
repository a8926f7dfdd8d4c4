//! Domain errors for the document `AuthZ` client.

use document_authz_sdk::DocumentAuthZError;

/// Internal domain errors.
///
/// Every variant collapses into [`DocumentAuthZError::RequestFailed`] at the
/// public boundary; the variant itself stays available as the error source.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("cannot build decision request URI: {0}")]
    InvalidUri(#[from] url::ParseError),

    #[error("decision service unreachable")]
    Transport(#[source] Box<ureq::Transport>),

    #[error("decision service responded with status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("cannot read decision service response")]
    UnreadableBody(#[source] std::io::Error),

    #[error("decision request cancelled")]
    Cancelled,

    #[error("decision task failed")]
    TaskFailed(#[source] tokio::task::JoinError),
}

impl From<ureq::Error> for DomainError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::Status(status, _) => Self::UnexpectedStatus { status },
            ureq::Error::Transport(transport) => Self::Transport(Box::new(transport)),
        }
    }
}

impl From<DomainError> for DocumentAuthZError {
    fn from(e: DomainError) -> Self {
        Self::request_failed(e)
    }
}
