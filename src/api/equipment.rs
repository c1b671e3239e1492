//! Equipment catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    error::AppResult,
    models::{CreateEquipment, Equipment, UpdateEquipment},
};

use super::ActingUser;

/// Proposed booking range for conflict checks
#[derive(Deserialize, IntoParams)]
pub struct ConflictQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Conflict check result
#[derive(Serialize, ToSchema)]
pub struct ConflictResponse {
    pub conflict: bool,
}

/// List all equipment
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    responses(
        (status = 200, description = "Equipment list", body = Vec<Equipment>),
        (status = 401, description = "No active session")
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
    ActingUser(_user): ActingUser,
) -> AppResult<Json<Vec<Equipment>>> {
    Ok(Json(state.services.equipment.list().await))
}

/// Get equipment by ID
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = Equipment),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    ActingUser(_user): ActingUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.get_by_id(id).await?;
    Ok(Json(equipment))
}

/// Create equipment (staff/admin)
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Equipment created", body = Equipment),
        (status = 403, description = "Role may not manage the catalog")
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    ActingUser(user): ActingUser,
    Json(data): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    data.validate()?;
    let equipment = state.services.equipment.create(&user, data).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Update equipment (staff/admin)
#[utoipa::path(
    put,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    request_body = UpdateEquipment,
    responses(
        (status = 200, description = "Equipment updated", body = Equipment),
        (status = 403, description = "Role may not manage the catalog"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn update_equipment(
    State(state): State<crate::AppState>,
    ActingUser(user): ActingUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateEquipment>,
) -> AppResult<Json<Equipment>> {
    data.validate()?;
    let equipment = state.services.equipment.update(&user, id, data).await?;
    Ok(Json(equipment))
}

/// Delete equipment (staff/admin); fails while active requests reference it
#[utoipa::path(
    delete,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 403, description = "Role may not manage the catalog"),
        (status = 404, description = "Equipment not found"),
        (status = 422, description = "Equipment has active requests")
    )
)]
pub async fn delete_equipment(
    State(state): State<crate::AppState>,
    ActingUser(user): ActingUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.equipment.delete(&user, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Check a proposed booking range against active bookings
#[utoipa::path(
    get,
    path = "/equipment/{id}/conflicts",
    tag = "equipment",
    params(
        ("id" = i32, Path, description = "Equipment ID"),
        ConflictQuery
    ),
    responses(
        (status = 200, description = "Conflict check result", body = ConflictResponse),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn check_conflicts(
    State(state): State<crate::AppState>,
    ActingUser(_user): ActingUser,
    Path(id): Path<i32>,
    Query(query): Query<ConflictQuery>,
) -> AppResult<Json<ConflictResponse>> {
    let conflict = state
        .services
        .requests
        .check_conflict(id, query.start_date, query.end_date)
        .await?;
    Ok(Json(ConflictResponse { conflict }))
}
