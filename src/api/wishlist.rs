//! Wishlist endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{
        tool::ToolWithOwner,
        wishlist::{WishlistEntry, WishlistToolId},
    },
};

use super::{ExecResult, MessageResponse};

/// Outcome of a wishlist add: either the insert result or a message for a
/// pair that was already saved.
#[derive(Serialize, ToSchema)]
#[serde(untagged)]
pub enum WishlistAddResponse {
    Added(ExecResult),
    Duplicate(MessageResponse),
}

/// Add a tool to a user's wishlist
#[utoipa::path(
    post,
    path = "/addToWishlist",
    tag = "wishlist",
    request_body = WishlistEntry,
    responses(
        (status = 200, description = "Added, or already present", body = WishlistAddResponse)
    )
)]
pub async fn add_to_wishlist(
    State(state): State<crate::AppState>,
    Json(request): Json<WishlistEntry>,
) -> AppResult<Json<WishlistAddResponse>> {
    let added = state
        .services
        .wishlist
        .add(&request.user_id, request.tool_id)
        .await?;

    let response = if added {
        WishlistAddResponse::Added(ExecResult::rows(1))
    } else {
        WishlistAddResponse::Duplicate(MessageResponse {
            message: "Already in wishlist".to_string(),
        })
    };

    Ok(Json(response))
}

/// Remove a tool from a user's wishlist
#[utoipa::path(
    delete,
    path = "/removeFromWishlist/{userId}/{toolId}",
    tag = "wishlist",
    params(
        ("userId" = String, Path, description = "User ID"),
        ("toolId" = i32, Path, description = "Tool ID")
    ),
    responses(
        (status = 200, description = "Removed", body = ExecResult)
    )
)]
pub async fn remove_from_wishlist(
    State(state): State<crate::AppState>,
    Path((user_id, tool_id)): Path<(String, i32)>,
) -> AppResult<Json<ExecResult>> {
    let affected = state.services.wishlist.remove(&user_id, tool_id).await?;
    Ok(Json(ExecResult::rows(affected)))
}

/// Ids of the tools on a user's wishlist
#[utoipa::path(
    get,
    path = "/getWishlistIds/{userId}",
    tag = "wishlist",
    params(
        ("userId" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Wished tool ids", body = Vec<WishlistToolId>)
    )
)]
pub async fn get_wishlist_ids(
    State(state): State<crate::AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<WishlistToolId>>> {
    let ids = state.services.wishlist.tool_ids(&user_id).await?;
    Ok(Json(ids))
}

/// Full wished tools with owner info
#[utoipa::path(
    get,
    path = "/myWishlist/{userId}",
    tag = "wishlist",
    params(
        ("userId" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Wished tools", body = Vec<ToolWithOwner>)
    )
)]
pub async fn my_wishlist(
    State(state): State<crate::AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<ToolWithOwner>>> {
    let tools = state.services.wishlist.wished_tools(&user_id).await?;
    Ok(Json(tools))
}
