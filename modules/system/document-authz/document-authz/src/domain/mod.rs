//! Domain layer for the document `AuthZ` client.

pub mod error;
pub mod local_client;
pub mod service;
pub mod uri;

pub use error::DomainError;
pub use local_client::DocumentAuthZLocalClient;
pub use service::{AuthorizationClient, is_granted};
