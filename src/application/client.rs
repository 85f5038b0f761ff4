/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Client for the Admission service
//!
//! Each operation is one HTTP request against the configured host. Nothing
//! is cached between calls and nothing is retried, so independent calls can
//! run concurrently on the same client.
//!
//! # Example
//! ```ignore
//! use admission_client::prelude::*;
//!
//! let client = AdmissionClient::new("https://admission.example.com", "token")?;
//! let (queues, users) = tokio::join!(client.list_queues(), client.count_users());
//! ```

use crate::application::interfaces::queues::QueueService;
use crate::application::interfaces::users::UserService;
use crate::config::Config;
use crate::constants::{EXPECT_OK, EXPECT_OK_OR_CONFLICT};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::identifier::Identifier;
use crate::model::requests::{
    CreateQueueRequest, QueueUserRequest, RegisterUserRequest, UserCertificateRequest,
    UserDetails, UsersQuery,
};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Admission service client
///
/// Cloning is cheap and clones share one connection pool.
#[derive(Clone)]
pub struct AdmissionClient {
    http_client: Arc<HttpClient>,
}

impl AdmissionClient {
    /// Creates a client for `host` authenticated with `token`
    ///
    /// # Returns
    /// * `Ok(AdmissionClient)` - Client ready to use
    /// * `Err(AppError)` - If the token cannot be sent as a header or the HTTP client cannot be built
    pub fn new(host: &str, token: &str) -> Result<Self, AppError> {
        Self::from_config(Config::with_credentials(host, token))
    }

    /// Creates a client from a [`Config`]
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        debug!("Admission client created for {}", http_client.config().host);
        Ok(Self { http_client })
    }

    /// Creates a client from the environment, see [`Config::new`]
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_config(Config::new())
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        self.http_client.config()
    }
}

#[async_trait]
impl UserService for AdmissionClient {
    async fn register_user(
        &self,
        uid: Identifier,
        username: Option<&str>,
        first_name: &str,
        last_name: Option<&str>,
    ) -> Result<(), AppError> {
        let body = RegisterUserRequest::new(first_name)
            .with_username(username)
            .with_last_name(last_name);
        info!("Registering user {}", uid);

        let status = self
            .http_client
            .execute(Method::POST, "/users", Some(&body), EXPECT_OK_OR_CONFLICT)
            .await?;

        if status == StatusCode::CONFLICT {
            debug!("User {} was already registered", uid);
        } else {
            debug!("Registered user {}", uid);
        }
        Ok(())
    }

    async fn set_user_details(
        &self,
        uid: Identifier,
        details: &UserDetails,
    ) -> Result<(), AppError> {
        let path = format!("/users/{}/registration", uid.to_path_segment()?);

        self.http_client
            .execute(Method::PUT, &path, Some(details), EXPECT_OK)
            .await?;

        debug!("Set details for user {}: {:?}", uid, details);
        Ok(())
    }

    async fn set_user_certificate(
        &self,
        uid: Identifier,
        cert: Identifier,
        full_name: &str,
    ) -> Result<(), AppError> {
        let path = format!("/users/{}/certificate", uid.to_path_segment()?);
        let body = UserCertificateRequest {
            certificate: cert,
            full_name: full_name.to_string(),
        };

        self.http_client
            .execute(Method::PUT, &path, Some(&body), EXPECT_OK)
            .await?;

        debug!(
            "Set certificate for user {}: {}, {}",
            uid, body.certificate, body.full_name
        );
        Ok(())
    }

    async fn get_users(
        &self,
        search: Option<&str>,
        offset: u64,
        size: u64,
    ) -> Result<Value, AppError> {
        let query = UsersQuery::new(search, offset, size);
        let path = format!("/users?{}", query.to_query_string());

        let users: Value = self.http_client.get(&path, EXPECT_OK).await?;

        debug!(
            "Got users by search {:?} with offset {} and size {}: {}",
            search, offset, size, users
        );
        Ok(users)
    }

    async fn get_user_info(&self, uid: Identifier) -> Result<Value, AppError> {
        let path = format!("/users/{}", uid.to_path_segment()?);

        let user: Value = self.http_client.get(&path, EXPECT_OK).await?;

        debug!("Got user {} info: {}", uid, user);
        Ok(user)
    }

    async fn count_users(&self) -> Result<u64, AppError> {
        let count: u64 = self.http_client.get("/users/count", EXPECT_OK).await?;
        debug!("Counted users: {}", count);
        Ok(count)
    }

    async fn get_registration_template(&self) -> Result<Value, AppError> {
        let template: Value = self
            .http_client
            .get("/templates/registration", EXPECT_OK)
            .await?;
        debug!("Registration template: {}", template);
        Ok(template)
    }
}

#[async_trait]
impl QueueService for AdmissionClient {
    async fn add_user_to_queue(
        &self,
        queue_id: Identifier,
        uid: Identifier,
    ) -> Result<Value, AppError> {
        let path = format!("/queues/{}/users", queue_id.to_path_segment()?);
        info!("Adding user {} to queue {}", uid, queue_id);

        let body = QueueUserRequest { id: uid };
        let result: Value = self.http_client.post(&path, &body, EXPECT_OK).await?;

        debug!("Added user {} to queue {}: {}", body.id, queue_id, result);
        Ok(result)
    }

    async fn remove_user_from_queue(
        &self,
        queue_id: Identifier,
        uid: Identifier,
    ) -> Result<(), AppError> {
        let path = format!(
            "/queues/{}/users/{}",
            queue_id.to_path_segment()?,
            uid.to_path_segment()?
        );

        self.http_client
            .execute(Method::DELETE, &path, None::<&()>, EXPECT_OK)
            .await?;

        debug!("Removed user {} from queue {}", uid, queue_id);
        Ok(())
    }

    async fn get_user_position(
        &self,
        queue_id: Identifier,
        uid: Identifier,
    ) -> Result<Value, AppError> {
        let path = format!(
            "/queues/{}/users/{}",
            queue_id.to_path_segment()?,
            uid.to_path_segment()?
        );

        let position: Value = self.http_client.get(&path, EXPECT_OK).await?;

        debug!(
            "Got position of user {} in queue {}: {}",
            uid, queue_id, position
        );
        Ok(position)
    }

    async fn get_all_users_positions(&self, queue_id: Identifier) -> Result<Value, AppError> {
        let path = format!("/queues/{}/users", queue_id.to_path_segment()?);

        let positions: Value = self.http_client.get(&path, EXPECT_OK).await?;

        debug!("Got users' positions in queue {}: {}", queue_id, positions);
        Ok(positions)
    }

    async fn list_queues(&self) -> Result<Value, AppError> {
        let queues: Value = self.http_client.get("/queues", EXPECT_OK).await?;
        debug!("Got queues: {}", queues);
        Ok(queues)
    }

    async fn get_queue_details(&self, queue_id: Identifier) -> Result<Value, AppError> {
        let path = format!("/queues/{}", queue_id.to_path_segment()?);

        let queue: Value = self.http_client.get(&path, EXPECT_OK).await?;

        debug!("Got queue {} info: {}", queue_id, queue);
        Ok(queue)
    }

    async fn create_queue(&self, queue_name: &str) -> Result<Value, AppError> {
        info!("Creating queue {}", queue_name);
        let body = CreateQueueRequest {
            name: queue_name.to_string(),
        };

        let queue: Value = self.http_client.post("/queues", &body, EXPECT_OK).await?;

        debug!("Created queue {}: {}", queue_name, queue);
        Ok(queue)
    }

    async fn update_queue(&self, queue_id: Identifier) -> Result<Value, AppError> {
        let path = format!("/queues/{}", queue_id.to_path_segment()?);

        let queue: Value = self.http_client.put(&path, None::<&()>, EXPECT_OK).await?;

        debug!("Updated queue {}: {}", queue_id, queue);
        Ok(queue)
    }
}
