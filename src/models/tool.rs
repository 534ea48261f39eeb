//! Tool (listing) model and related types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Availability state of a tool.
///
/// `rented` holds exactly while one active rental references the tool. The
/// state is denormalized onto the tools table so catalog queries can filter
/// on it directly; only the rentals repository flips it, and always in the
/// same transaction as the paired rental write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    Available,
    Rented,
}

impl ToolStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolStatus::Available => "available",
            ToolStatus::Rented => "rented",
        }
    }
}

impl From<&str> for ToolStatus {
    fn from(s: &str) -> Self {
        match s {
            "rented" => ToolStatus::Rented,
            _ => ToolStatus::Available,
        }
    }
}

impl std::fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tool joined with its owner's display fields, as shown in the public
/// catalog and in wishlists.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToolWithOwner {
    pub tool_id: i32,
    pub owner_id: String,
    pub tool_name: String,
    pub category: String,
    pub price: Decimal,
    pub tool_image: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub owner_name: String,
    pub owner_image: Option<String>,
}

/// Owner's view of one of their listings: the tool plus, when it is out,
/// the active rental window and the renter's name.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerListing {
    pub tool_id: i32,
    pub owner_id: String,
    pub tool_name: String,
    pub category: String,
    pub price: Decimal,
    pub tool_image: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub renter_name: Option<String>,
}

/// Listing creation request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTool {
    pub owner_id: String,
    pub tool_name: String,
    pub category: String,
    pub price: Decimal,
    pub tool_image: Option<String>,
}

/// Listing update request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTool {
    pub tool_id: i32,
    pub tool_name: String,
    pub category: String,
    pub price: Decimal,
    pub tool_image: Option<String>,
}
