/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{DEFAULT_HOST, HOST_ENV, TIMEOUT_ENV, TOKEN_ENV};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, error};

/// Configuration for the Admission service client
///
/// The host is used verbatim as the prefix of every request URL, so it should
/// not end with a slash.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the Admission service, e.g. `https://admission.example.com`
    pub host: String,
    /// Bearer token sent with every request
    pub token: String,
    /// Request timeout in seconds. `None` waits indefinitely
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Loads `.env` when present, then reads `ADMISSION_HOST`,
    /// `ADMISSION_TOKEN` and `ADMISSION_TIMEOUT_SECS`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let host = get_env_or_default(HOST_ENV, String::from(DEFAULT_HOST));
        let token = get_env_or_default(TOKEN_ENV, String::new());
        if token.is_empty() {
            error!("{TOKEN_ENV} not found in environment variables or .env file");
        }

        Config {
            host,
            token,
            timeout_secs: get_env_or_none(TIMEOUT_ENV),
        }
    }

    /// Creates a configuration without touching the environment
    pub fn with_credentials(host: impl Into<String>, token: impl Into<String>) -> Self {
        Config {
            host: host.into(),
            token: token.into(),
            timeout_secs: None,
        }
    }

    /// Sets the request timeout in seconds
    #[must_use]
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Request timeout as a [`Duration`], if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("token", &"[redacted]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visible = serde_json::json!({
            "host": self.host,
            "timeout_secs": self.timeout_secs,
        });
        write!(f, "{visible}")
    }
}
