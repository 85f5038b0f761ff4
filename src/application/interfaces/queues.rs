use crate::error::AppError;
use crate::model::identifier::Identifier;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for queues and the positions of users in them
#[async_trait]
pub trait QueueService: Send + Sync {
    /// Adds a user to a queue and returns the service's answer
    async fn add_user_to_queue(&self, queue_id: Identifier, uid: Identifier)
    -> Result<Value, AppError>;

    /// Removes a user from a queue
    async fn remove_user_from_queue(
        &self,
        queue_id: Identifier,
        uid: Identifier,
    ) -> Result<(), AppError>;

    /// Gets the position of a user in a queue
    async fn get_user_position(&self, queue_id: Identifier, uid: Identifier)
    -> Result<Value, AppError>;

    /// Gets the positions of every user in a queue
    async fn get_all_users_positions(&self, queue_id: Identifier) -> Result<Value, AppError>;

    /// Lists all queues
    async fn list_queues(&self) -> Result<Value, AppError>;

    /// Gets the details of one queue
    async fn get_queue_details(&self, queue_id: Identifier) -> Result<Value, AppError>;

    /// Creates a queue with the given name
    async fn create_queue(&self, queue_name: &str) -> Result<Value, AppError>;

    /// Updates a queue. The request carries no body
    async fn update_queue(&self, queue_id: Identifier) -> Result<Value, AppError>;
}
