/// Bearer authentication
pub mod auth;
/// Admission service client
pub mod client;
/// Module containing service interfaces and traits
pub mod interfaces;

pub use interfaces::queues::*;
pub use interfaces::users::*;
