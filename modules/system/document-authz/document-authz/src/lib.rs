#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Document `AuthZ` Client
//!
//! Asks a remote decision service whether a user may access a document.
//!
//! - [`AuthorizationClient`] - blocking client, one GET per decision
//! - [`DocumentAuthZLocalClient`] - async [`DocumentAuthZClient`] adapter with
//!   lifecycle cancellation
//!
//! ## Wire format
//!
//! ```text
//! GET http://{host}:{port}/authorise?systemId=42&userId={userId}&documentId={documentId}
//! ```
//!
//! Query values are form-encoded (space is sent as `+`). A 2xx response whose
//! trimmed body is exactly `ALLOW` grants access; any other body denies it.
//! Everything else (transport failure, non-2xx status, unreadable body) is a
//! [`DocumentAuthZError::RequestFailed`].
//!
//! ## Configuration
//!
//! ```yaml
//! document_authz:
//!   host: "dpc.internal"
//!   port: 8080
//!   timeout_ms: 10000
//! ```
//!
//! [`DocumentAuthZClient`]: document_authz_sdk::DocumentAuthZClient
//! [`DocumentAuthZError::RequestFailed`]: document_authz_sdk::DocumentAuthZError::RequestFailed

pub mod config;
pub mod domain;

pub use config::{ConfigError, DocumentAuthZConfig};
pub use domain::{AuthorizationClient, DocumentAuthZLocalClient};
