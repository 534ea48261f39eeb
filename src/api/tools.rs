//! Tool listing endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::tool::{CreateTool, OwnerListing, ToolWithOwner, UpdateTool},
};

use super::ExecResult;

/// Create a new listing
#[utoipa::path(
    post,
    path = "/addTool",
    tag = "tools",
    request_body = CreateTool,
    responses(
        (status = 201, description = "Listing created", body = ExecResult),
        (status = 400, description = "Negative price")
    )
)]
pub async fn add_tool(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateTool>,
) -> AppResult<(StatusCode, Json<ExecResult>)> {
    let tool_id = state.services.catalog.add_tool(request).await?;
    Ok((StatusCode::CREATED, Json(ExecResult::inserted(tool_id))))
}

/// All currently available tools with owner display fields
#[utoipa::path(
    get,
    path = "/getTools",
    tag = "tools",
    responses(
        (status = 200, description = "Available tools", body = Vec<ToolWithOwner>)
    )
)]
pub async fn get_tools(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<ToolWithOwner>>> {
    let tools = state.services.catalog.available_tools().await?;
    Ok(Json(tools))
}

/// An owner's listings with active renter info
#[utoipa::path(
    get,
    path = "/getMyListings/{userId}",
    tag = "tools",
    params(
        ("userId" = String, Path, description = "Owner's user ID")
    ),
    responses(
        (status = 200, description = "Owner's listings", body = Vec<OwnerListing>)
    )
)]
pub async fn get_my_listings(
    State(state): State<crate::AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<OwnerListing>>> {
    let listings = state.services.catalog.my_listings(&user_id).await?;
    Ok(Json(listings))
}

/// Update a listing's display fields
#[utoipa::path(
    put,
    path = "/updateTool",
    tag = "tools",
    request_body = UpdateTool,
    responses(
        (status = 200, description = "Listing updated", body = ExecResult),
        (status = 400, description = "Negative price")
    )
)]
pub async fn update_tool(
    State(state): State<crate::AppState>,
    Json(request): Json<UpdateTool>,
) -> AppResult<Json<ExecResult>> {
    let affected = state.services.catalog.update_tool(request).await?;
    Ok(Json(ExecResult::rows(affected)))
}

/// Delete a listing, refused while the tool is out on an active rental
#[utoipa::path(
    delete,
    path = "/deleteTool/{toolId}",
    tag = "tools",
    params(
        ("toolId" = i32, Path, description = "Tool ID")
    ),
    responses(
        (status = 200, description = "Listing deleted", body = ExecResult),
        (status = 400, description = "Tool is currently rented out"),
        (status = 404, description = "Tool not found")
    )
)]
pub async fn delete_tool(
    State(state): State<crate::AppState>,
    Path(tool_id): Path<i32>,
) -> AppResult<Json<ExecResult>> {
    let affected = state.services.catalog.delete_tool(tool_id).await?;
    Ok(Json(ExecResult::rows(affected)))
}
