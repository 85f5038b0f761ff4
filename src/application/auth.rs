/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use reqwest::header::HeaderValue;
use std::fmt;

/// Bearer credential attached to every request
///
/// The `Authorization` header value is built once and reused for the
/// lifetime of the client. It is marked sensitive and never printed.
#[derive(Clone)]
pub struct BearerAuth {
    header: HeaderValue,
}

impl BearerAuth {
    /// Builds the `Bearer <token>` header value
    ///
    /// # Returns
    /// * `Ok(BearerAuth)` - Header ready to attach
    /// * `Err(AppError::InvalidInput)` - If the token contains characters not allowed in a header
    pub fn new(token: &str) -> Result<Self, AppError> {
        let mut header = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
            AppError::InvalidInput("token contains characters not allowed in a header".to_string())
        })?;
        header.set_sensitive(true);
        Ok(Self { header })
    }

    /// The `Authorization` header value
    pub fn header_value(&self) -> &HeaderValue {
        &self.header
    }
}

impl fmt::Debug for BearerAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerAuth([redacted])")
    }
}
