/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Errors returned by the Admission client
#[derive(Debug)]
pub enum AppError {
    /// Transport failure: connection refused, DNS, timeout or an unusable URL
    Network(reqwest::Error),
    /// The server answered with a status the operation does not accept
    Unexpected(StatusCode),
    /// A success body that is not valid JSON for the expected shape
    Json(serde_json::Error),
    /// Construction input that cannot be used
    InvalidInput(String),
}

impl AppError {
    /// Status code of the response, if the error came from one
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Unexpected(status) => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}
