/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::model::identifier::Identifier;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form registration details, keyed by the fields of the registration template
pub type UserDetails = Map<String, Value>;

/// Body of `POST /users`
///
/// Optional fields are left out of the JSON entirely when unset.
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    /// Username, if the user has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// First name
    pub first_name: String,
    /// Last name, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl RegisterUserRequest {
    /// Creates a registration with just the first name (required field)
    pub fn new(first_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            ..Default::default()
        }
    }

    /// Set the username
    pub fn with_username(mut self, username: Option<&str>) -> Self {
        self.username = username.map(str::to_string);
        self
    }

    /// Set the last name
    pub fn with_last_name(mut self, last_name: Option<&str>) -> Self {
        self.last_name = last_name.map(str::to_string);
        self
    }
}

/// Body of `PUT /users/{uid}/certificate`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCertificateRequest {
    /// Certificate number or code
    pub certificate: Identifier,
    /// Full name as printed on the certificate
    pub full_name: String,
}

/// Body of `POST /queues/{queue_id}/users`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueUserRequest {
    /// Id of the user to enqueue
    pub id: Identifier,
}

/// Body of `POST /queues`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateQueueRequest {
    /// Queue name
    pub name: String,
}

/// Search and paging parameters of `GET /users`
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersQuery {
    /// Optional search term
    pub search: Option<String>,
    /// Number of users to skip
    pub skip: u64,
    /// Number of users to return
    pub take: u64,
}

impl UsersQuery {
    /// Creates a query for one page
    pub fn new(search: Option<&str>, skip: u64, take: u64) -> Self {
        Self {
            search: search.map(str::to_string),
            skip,
            take,
        }
    }

    /// Renders `[search=<term>&]skip=<n>&take=<n>` with the search term percent-encoded
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::with_capacity(3);
        if let Some(search) = &self.search {
            params.push(format!("search={}", urlencoding::encode(search)));
        }
        params.push(format!("skip={}", self.skip));
        params.push(format!("take={}", self.take));
        params.join("&")
    }
}
