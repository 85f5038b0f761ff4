use reqwest::StatusCode;

/// Host used when `ADMISSION_HOST` is not set
pub const DEFAULT_HOST: &str = "http://localhost:8080";
/// Environment variable holding the service base URL
pub const HOST_ENV: &str = "ADMISSION_HOST";
/// Environment variable holding the bearer token
pub const TOKEN_ENV: &str = "ADMISSION_TOKEN";
/// Environment variable holding an optional request timeout in seconds
pub const TIMEOUT_ENV: &str = "ADMISSION_TIMEOUT_SECS";
/// Environment variable selecting the log level
pub const LOG_LEVEL_ENV: &str = "LOGLEVEL";

/// Statuses accepted by almost every operation
pub const EXPECT_OK: &[StatusCode] = &[StatusCode::OK];
/// Registration also accepts 409, the user already exists
pub const EXPECT_OK_OR_CONFLICT: &[StatusCode] = &[StatusCode::OK, StatusCode::CONFLICT];
