//! Rental lifecycle endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::rental::{LenderStats, RentalDetails},
};

use super::MessageResponse;

/// Rent request
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RentToolRequest {
    /// Tool to rent
    pub tool_id: i32,
    /// Renting user
    pub renter_id: String,
    /// Rental duration in calendar days
    pub days: i64,
}

/// Rent response
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RentResponse {
    /// Status message
    pub message: String,
    /// Id of the created rental
    pub rental_id: i32,
}

/// Return request
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReturnToolRequest {
    /// Rental being closed
    pub rental_id: i32,
    /// Tool the caller believes the rental is for; cross-checked against
    /// the rental record
    pub tool_id: i32,
}

/// Rent a tool for a number of days
#[utoipa::path(
    post,
    path = "/rentTool",
    tag = "rentals",
    request_body = RentToolRequest,
    responses(
        (status = 201, description = "Rental created", body = RentResponse),
        (status = 400, description = "Tool not available or invalid duration"),
        (status = 404, description = "Tool not found")
    )
)]
pub async fn rent_tool(
    State(state): State<crate::AppState>,
    Json(request): Json<RentToolRequest>,
) -> AppResult<(StatusCode, Json<RentResponse>)> {
    let (rental_id, _quote) = state
        .services
        .rentals
        .create_rental(request.tool_id, &request.renter_id, request.days)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RentResponse {
            message: "Rental successful!".to_string(),
            rental_id,
        }),
    ))
}

/// Return a rented tool
#[utoipa::path(
    post,
    path = "/returnTool",
    tag = "rentals",
    request_body = ReturnToolRequest,
    responses(
        (status = 200, description = "Tool returned", body = MessageResponse),
        (status = 400, description = "Already returned or tool mismatch"),
        (status = 404, description = "Rental not found")
    )
)]
pub async fn return_tool(
    State(state): State<crate::AppState>,
    Json(request): Json<ReturnToolRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .rentals
        .return_rental(request.rental_id, request.tool_id)
        .await?;

    Ok(Json(MessageResponse {
        message: "Tool returned successfully".to_string(),
    }))
}

/// A renter's rental history with tool and owner display fields
#[utoipa::path(
    get,
    path = "/myRentals/{userId}",
    tag = "rentals",
    params(
        ("userId" = String, Path, description = "Renter's user ID")
    ),
    responses(
        (status = 200, description = "Renter's rentals", body = Vec<RentalDetails>)
    )
)]
pub async fn my_rentals(
    State(state): State<crate::AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<RentalDetails>>> {
    let rentals = state.services.rentals.my_rentals(&user_id).await?;
    Ok(Json(rentals))
}

/// Earnings and active rental count for a lender
#[utoipa::path(
    get,
    path = "/getLenderStats/{userId}",
    tag = "rentals",
    params(
        ("userId" = String, Path, description = "Lender's user ID")
    ),
    responses(
        (status = 200, description = "Lender statistics", body = LenderStats)
    )
)]
pub async fn get_lender_stats(
    State(state): State<crate::AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<LenderStats>> {
    let stats = state.services.rentals.lender_stats(&user_id).await?;
    Ok(Json(stats))
}
