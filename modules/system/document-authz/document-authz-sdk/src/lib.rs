#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Document `AuthZ` SDK
//!
//! This crate provides the public API for the `document_authz` module:
//!
//! - [`DocumentAuthZClient`] - Public API trait for consumers
//! - [`AuthorizationRequest`] - Decision request model
//! - [`DocumentAuthZError`] - Error types
//! - [`CALLING_SYSTEM_ID`] - Identifier sent with every decision request
//!
//! Access denial is a decision (`Ok(false)`), never an error. An `Err` means the
//! decision could not be obtained at all.
//!
//! ## Usage
//!
//! ```ignore
//! use document_authz_sdk::{AuthorizationRequest, DocumentAuthZClient};
//!
//! let authz: Arc<dyn DocumentAuthZClient> = /* wired by the host */;
//!
//! if authz.is_authorized(AuthorizationRequest::new("u1", "d1")).await? {
//!     // serve the document
//! }
//! ```

pub mod api;
pub mod error;
pub mod models;

// Re-export main types at crate root
pub use api::DocumentAuthZClient;
pub use error::DocumentAuthZError;
pub use models::{AuthorizationRequest, CALLING_SYSTEM_ID};
