use crate::error::AppError;
use crate::model::identifier::Identifier;
use crate::model::requests::UserDetails;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for user registration and lookup
#[async_trait]
pub trait UserService: Send + Sync {
    /// Registers a user
    ///
    /// `username` and `last_name` are omitted from the request when `None`.
    /// A user that is already registered (409) counts as success.
    ///
    /// # Arguments
    /// * `uid` - Caller-side id of the user, used for logging
    /// * `username` - Optional username
    /// * `first_name` - First name
    /// * `last_name` - Optional last name
    async fn register_user(
        &self,
        uid: Identifier,
        username: Option<&str>,
        first_name: &str,
        last_name: Option<&str>,
    ) -> Result<(), AppError>;

    /// Stores the registration details of a user
    async fn set_user_details(&self, uid: Identifier, details: &UserDetails)
    -> Result<(), AppError>;

    /// Stores the certificate of a user
    ///
    /// # Arguments
    /// * `uid` - User id
    /// * `cert` - Certificate number or code
    /// * `full_name` - Full name as printed on the certificate
    async fn set_user_certificate(
        &self,
        uid: Identifier,
        cert: Identifier,
        full_name: &str,
    ) -> Result<(), AppError>;

    /// Gets one page of users, optionally filtered by a search term
    async fn get_users(
        &self,
        search: Option<&str>,
        offset: u64,
        size: u64,
    ) -> Result<Value, AppError>;

    /// Gets information about one user
    async fn get_user_info(&self, uid: Identifier) -> Result<Value, AppError>;

    /// Gets the number of registered users
    async fn count_users(&self) -> Result<u64, AppError>;

    /// Gets the template describing the registration details form
    async fn get_registration_template(&self) -> Result<Value, AppError>;
}
