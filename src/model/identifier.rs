/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Identifier of a user, queue or certificate
///
/// The service accepts both numeric and textual ids. The variant decides the
/// JSON type in request bodies: numbers stay numbers, strings stay strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    /// Numeric id
    Int(i64),
    /// Textual id
    Str(String),
}

impl Identifier {
    /// Percent-encoded form, safe to use as a single URL path segment
    ///
    /// `""`, `"."` and `".."` are rejected: URL parsing would drop or resolve
    /// them and the request would reach a different resource.
    pub fn to_path_segment(&self) -> Result<Cow<'_, str>, AppError> {
        match self {
            Identifier::Int(id) => Ok(Cow::Owned(id.to_string())),
            Identifier::Str(id) if id.is_empty() || id == "." || id == ".." => Err(
                AppError::InvalidInput(format!("{id:?} cannot be used as a path identifier")),
            ),
            Identifier::Str(id) => Ok(urlencoding::encode(id)),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Int(id) => write!(f, "{id}"),
            Identifier::Str(id) => f.write_str(id),
        }
    }
}

impl From<i64> for Identifier {
    fn from(id: i64) -> Self {
        Identifier::Int(id)
    }
}

impl From<i32> for Identifier {
    fn from(id: i32) -> Self {
        Identifier::Int(i64::from(id))
    }
}

impl From<u32> for Identifier {
    fn from(id: u32) -> Self {
        Identifier::Int(i64::from(id))
    }
}

impl TryFrom<u64> for Identifier {
    type Error = AppError;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        i64::try_from(id)
            .map(Identifier::Int)
            .map_err(|_| AppError::InvalidInput(format!("id {id} does not fit in i64")))
    }
}

impl From<&str> for Identifier {
    fn from(id: &str) -> Self {
        Identifier::Str(id.to_string())
    }
}

impl From<String> for Identifier {
    fn from(id: String) -> Self {
        Identifier::Str(id)
    }
}

impl From<&String> for Identifier {
    fn from(id: &String) -> Self {
        Identifier::Str(id.clone())
    }
}
