//! Wishlist service

use crate::{
    error::AppResult,
    models::{tool::ToolWithOwner, wishlist::WishlistToolId},
    repository::Repository,
};

#[derive(Clone)]
pub struct WishlistService {
    repository: Repository,
}

impl WishlistService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Add a tool to a user's wishlist; false if it was already there
    pub async fn add(&self, user_id: &str, tool_id: i32) -> AppResult<bool> {
        self.repository.wishlist.add(user_id, tool_id).await
    }

    /// Remove a tool from a user's wishlist
    pub async fn remove(&self, user_id: &str, tool_id: i32) -> AppResult<u64> {
        self.repository.wishlist.remove(user_id, tool_id).await
    }

    /// Ids of the tools on a user's wishlist
    pub async fn tool_ids(&self, user_id: &str) -> AppResult<Vec<WishlistToolId>> {
        self.repository.wishlist.tool_ids(user_id).await
    }

    /// Full wished tools with owner info
    pub async fn wished_tools(&self, user_id: &str) -> AppResult<Vec<ToolWithOwner>> {
        self.repository.wishlist.wished_tools(user_id).await
    }
}
