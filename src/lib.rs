/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Admission Client
//!
//! Async client for the Admission service: user registration, certificates
//! and named queues.
//!
//! Every operation is exactly one HTTP request carrying an
//! `Authorization: Bearer <token>` header. The response status is checked
//! against the set the operation accepts and the JSON body is returned as is.
//!
//! ```ignore
//! use admission_client::prelude::*;
//!
//! let client = AdmissionClient::new("https://admission.example.com", "token")?;
//! client
//!     .register_user(Identifier::from(42), Some("jdoe"), "John", None)
//!     .await?;
//! let queue = client.create_queue("morning").await?;
//! ```

/// Application layer: authentication, service interfaces and the client
pub mod application;
/// Client configuration
pub mod config;
/// Library-wide constants
pub mod constants;
/// Error type shared by every operation
pub mod error;
/// Wire models and the HTTP transport
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
