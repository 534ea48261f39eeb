//! Wishlist model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Wishlist membership request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    pub user_id: String,
    pub tool_id: i32,
}

/// Bare tool reference, used by clients to mark saved listings.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WishlistToolId {
    pub tool_id: i32,
}
