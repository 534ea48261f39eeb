//! Wishlist repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{tool::ToolWithOwner, wishlist::WishlistToolId},
};

#[derive(Clone)]
pub struct WishlistRepository {
    pool: Pool<Postgres>,
}

impl WishlistRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Add a tool to a user's wishlist. Returns false when the pair was
    /// already present; the conflict is resolved by the store, not by a
    /// separate lookup.
    pub async fn add(&self, user_id: &str, tool_id: i32) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO wishlist (user_id, tool_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, tool_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(tool_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Remove a tool from a user's wishlist
    pub async fn remove(&self, user_id: &str, tool_id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM wishlist WHERE user_id = $1 AND tool_id = $2")
            .bind(user_id)
            .bind(tool_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Tool ids on a user's wishlist (for marking saved listings)
    pub async fn tool_ids(&self, user_id: &str) -> AppResult<Vec<WishlistToolId>> {
        let ids = sqlx::query_as::<_, WishlistToolId>(
            "SELECT tool_id FROM wishlist WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    /// Full wished tools with owner display fields
    pub async fn wished_tools(&self, user_id: &str) -> AppResult<Vec<ToolWithOwner>> {
        let tools = sqlx::query_as::<_, ToolWithOwner>(
            r#"
            SELECT t.tool_id, t.owner_id, t.tool_name, t.category, t.price,
                   t.tool_image, t.status, t.created_at,
                   u.user_name AS owner_name, u.user_image AS owner_image
            FROM wishlist w
            JOIN tools t ON w.tool_id = t.tool_id
            JOIN users u ON t.owner_id = u.user_id
            WHERE w.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tools)
    }
}
