//! User model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// User account row. The identifier is caller-supplied, not generated by the
/// server. The stored credential is never serialized back to clients.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub user_name: String,
    #[serde(skip_serializing)]
    pub user_password: String,
    pub user_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Registration request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub user_id: String,
    pub user_name: String,
    pub user_password: String,
    pub user_image: Option<String>,
}

/// Login request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub user_id: String,
    pub user_password: String,
}

/// Profile update request. The password is only changed when a non-blank
/// value is supplied.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub user_id: String,
    pub user_name: String,
    pub user_password: Option<String>,
    pub user_image: Option<String>,
}

impl UpdateUser {
    /// The password to persist, if the request actually carries one.
    pub fn new_password(&self) -> Option<&str> {
        self.user_password
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}
