//! User endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{BorrowRequest, User},
};

use super::ActingUser;

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "User list", body = Vec<User>),
        (status = 401, description = "No active session")
    )
)]
pub async fn list_users(
    State(state): State<crate::AppState>,
    ActingUser(_user): ActingUser,
) -> AppResult<Json<Vec<User>>> {
    Ok(Json(state.services.users.list().await))
}

/// Get requests made by a user
#[utoipa::path(
    get,
    path = "/users/{id}/requests",
    tag = "users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User's requests", body = Vec<BorrowRequest>),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_requests(
    State(state): State<crate::AppState>,
    ActingUser(_user): ActingUser,
    Path(user_id): Path<i32>,
) -> AppResult<Json<Vec<BorrowRequest>>> {
    let requests = state.services.requests.list_for_user(user_id).await?;
    Ok(Json(requests))
}
