/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Admission Client Prelude
//!
//! Brings the client, its service traits and the types their signatures use
//! into scope with a single import.
//!
//! ```ignore
//! use admission_client::prelude::*;
//!
//! let client = AdmissionClient::from_env()?;
//! let count = client.count_users().await?;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Admission client
pub use crate::config::Config;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Admission service client
pub use crate::application::client::AdmissionClient;

/// Bearer credential
pub use crate::application::auth::BearerAuth;

/// Service traits
pub use crate::application::interfaces::queues::QueueService;
pub use crate::application::interfaces::users::UserService;

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::identifier::Identifier;
pub use crate::model::requests::{
    CreateQueueRequest, QueueUserRequest, RegisterUserRequest, UserCertificateRequest,
    UserDetails, UsersQuery,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup
pub use crate::utils::logger::setup_logger;

/// JSON value returned by most operations
pub use serde_json::Value;
