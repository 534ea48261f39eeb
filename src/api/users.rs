//! User account endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::user::{CreateUser, Credentials, UpdateUser, User},
};

use super::ExecResult;

/// Register a new account
#[utoipa::path(
    post,
    path = "/register",
    tag = "users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "Account created", body = ExecResult),
        (status = 500, description = "Store failure (e.g. id already taken)")
    )
)]
pub async fn register(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<ExecResult>)> {
    let affected = state.services.users.register(request).await?;
    Ok((StatusCode::CREATED, Json(ExecResult::rows(affected))))
}

/// Match an id/credential pair. Returns the matching rows; an empty array
/// means the login failed.
#[utoipa::path(
    post,
    path = "/login",
    tag = "users",
    request_body = Credentials,
    responses(
        (status = 200, description = "Matching user rows", body = Vec<User>)
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(request): Json<Credentials>,
) -> AppResult<Json<Vec<User>>> {
    let users = state.services.users.login(request).await?;
    Ok(Json(users))
}

/// Update a profile. The password only changes when a non-blank value is
/// supplied.
#[utoipa::path(
    put,
    path = "/updateUser",
    tag = "users",
    request_body = UpdateUser,
    responses(
        (status = 200, description = "Profile updated", body = ExecResult)
    )
)]
pub async fn update_user(
    State(state): State<crate::AppState>,
    Json(request): Json<UpdateUser>,
) -> AppResult<Json<ExecResult>> {
    let affected = state.services.users.update_profile(request).await?;
    Ok(Json(ExecResult::rows(affected)))
}
