//! Catalog (listings) service

use rust_decimal::Decimal;

use crate::{
    error::{AppError, AppResult},
    models::tool::{CreateTool, OwnerListing, ToolWithOwner, UpdateTool},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a new listing
    pub async fn add_tool(&self, tool: CreateTool) -> AppResult<i32> {
        if tool.price < Decimal::ZERO {
            return Err(AppError::Validation(
                "Price per day must not be negative".to_string(),
            ));
        }
        self.repository.tools.create(&tool).await
    }

    /// Update a listing's display fields
    pub async fn update_tool(&self, update: UpdateTool) -> AppResult<u64> {
        if update.price < Decimal::ZERO {
            return Err(AppError::Validation(
                "Price per day must not be negative".to_string(),
            ));
        }
        self.repository.tools.update(&update).await
    }

    /// All currently available listings for the public catalog
    pub async fn available_tools(&self) -> AppResult<Vec<ToolWithOwner>> {
        self.repository.tools.list_available().await
    }

    /// An owner's listings with active renter info
    pub async fn my_listings(&self, owner_id: &str) -> AppResult<Vec<OwnerListing>> {
        self.repository.tools.list_by_owner(owner_id).await
    }

    /// Delete a listing, refusing while it is out on an active rental
    pub async fn delete_tool(&self, tool_id: i32) -> AppResult<u64> {
        self.repository.tools.delete_guarded(tool_id).await
    }
}
