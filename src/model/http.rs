/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::auth::BearerAuth;
use crate::config::Config;
use crate::error::AppError;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error};

/// Thin HTTP layer over the Admission service
///
/// Holds one pooled `reqwest` client, the configuration and the bearer
/// header. Requests share the pool but nothing else: no request depends on
/// state left behind by another one.
pub struct HttpClient {
    http_client: Client,
    config: Arc<Config>,
    auth: BearerAuth,
}

impl HttpClient {
    /// Creates the HTTP layer
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Ready to send requests
    /// * `Err(AppError)` - If the token is not a valid header value or the client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let auth = BearerAuth::new(&config.token)?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            config: Arc::new(config),
            auth,
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Full URL for a path. The host is used verbatim
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.host, path)
    }

    /// Makes a GET request and decodes the JSON body
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        expected: &[StatusCode],
    ) -> Result<T, AppError> {
        self.request(Method::GET, path, None::<&()>, expected).await
    }

    /// Makes a POST request with a JSON body and decodes the JSON response
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        expected: &[StatusCode],
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, Some(body), expected).await
    }

    /// Makes a PUT request, with an optional JSON body, and decodes the JSON response
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
        expected: &[StatusCode],
    ) -> Result<T, AppError> {
        self.request(Method::PUT, path, body, expected).await
    }

    /// Sends a request and decodes the JSON body of an accepted response
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        expected: &[StatusCode],
    ) -> Result<T, AppError> {
        let response = self.send(method, path, body, expected).await?;
        parse_response(response).await
    }

    /// Sends a request whose response body is not needed
    ///
    /// # Returns
    /// * `Ok(StatusCode)` - The accepted status
    /// * `Err(AppError)` - Transport failure or a status outside `expected`
    pub async fn execute<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        expected: &[StatusCode],
    ) -> Result<StatusCode, AppError> {
        let response = self.send(method, path, body, expected).await?;
        Ok(response.status())
    }

    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        expected: &[StatusCode],
    ) -> Result<Response, AppError> {
        let url = self.url(path);
        make_http_request(&self.http_client, &self.auth, method, &url, body, expected).await
    }
}

/// Makes one HTTP request and checks its status
///
/// Attaches the bearer header, serializes `body` as JSON when present and
/// returns the response only if its status is one of `expected`. There is
/// no retry: every failure goes straight back to the caller.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `auth` - Bearer credential
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `body` - Optional request body (will be serialized to JSON)
/// * `expected` - Statuses treated as success
///
/// # Returns
///
/// * `Ok(Response)` - Response with an accepted status
/// * `Err(AppError::Unexpected)` - Any other status
/// * `Err(AppError::Network)` - Transport failure
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    auth: &BearerAuth,
    method: Method,
    url: &str,
    body: Option<&B>,
    expected: &[StatusCode],
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client
        .request(method, url)
        .header(AUTHORIZATION, auth.header_value().clone());

    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if expected.contains(&status) {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    error!("Request failed with status {}: {}", status, body);
    Err(AppError::Unexpected(status))
}

/// Reads the whole body and decodes it as JSON
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
