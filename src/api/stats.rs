//! Statistics endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, services::stats::DashboardStats};

use super::ActingUser;

/// Dashboard statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStats),
        (status = 401, description = "No active session")
    )
)]
pub async fn get_stats(
    State(state): State<crate::AppState>,
    ActingUser(_user): ActingUser,
) -> AppResult<Json<DashboardStats>> {
    Ok(Json(state.services.stats.dashboard().await))
}
