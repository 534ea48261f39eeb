//! API handlers for ToolLink REST endpoints

pub mod health;
pub mod openapi;
pub mod rentals;
pub mod tools;
pub mod users;
pub mod wishlist;

use serde::Serialize;
use utoipa::ToSchema;

/// Mutation outcome, echoing the result-object shape clients of the
/// original API read (`affectedRows`, `insertId`).
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExecResult {
    /// Number of rows the statement touched
    pub affected_rows: u64,
    /// Generated id, for inserts into serial-keyed tables
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_id: Option<i32>,
}

impl ExecResult {
    pub fn rows(affected_rows: u64) -> Self {
        Self {
            affected_rows,
            insert_id: None,
        }
    }

    pub fn inserted(insert_id: i32) -> Self {
        Self {
            affected_rows: 1,
            insert_id: Some(insert_id),
        }
    }
}

/// Plain status message body
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
