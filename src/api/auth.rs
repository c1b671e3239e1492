//! Session endpoints

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    error::AppResult,
    models::{LoginRequest, User},
};

use super::ActingUser;

/// Log in by email and role.
///
/// Any email may log in under any role; unknown emails get a synthesized
/// user record. The password field, when present, is ignored.
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = User),
        (status = 400, description = "Malformed email")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<User>> {
    request.validate()?;
    let user = state.services.sessions.login(&request.email, request.role).await?;
    Ok(Json(user))
}

/// Log out, clearing the session and its cache slot. Idempotent.
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "auth",
    responses(
        (status = 204, description = "Session cleared")
    )
)]
pub async fn logout(State(state): State<crate::AppState>) -> StatusCode {
    state.services.sessions.logout().await;
    StatusCode::NO_CONTENT
}

/// The current acting user
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    responses(
        (status = 200, description = "Current user", body = User),
        (status = 401, description = "No active session")
    )
)]
pub async fn me(ActingUser(user): ActingUser) -> Json<User> {
    Json(user)
}
