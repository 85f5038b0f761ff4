/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// HTTP transport: URL building, bearer auth and status checks
pub mod http;
/// Identifiers for users, queues and certificates
pub mod identifier;
/// Request models for API calls
pub mod requests;
