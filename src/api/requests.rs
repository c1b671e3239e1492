//! Borrow request endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::{BorrowRequest, CreateBorrowRequest, ProcessReturn, ReviewRequest},
};

use super::ActingUser;

/// List all borrow requests with their effective status
#[utoipa::path(
    get,
    path = "/requests",
    tag = "requests",
    responses(
        (status = 200, description = "Request list", body = Vec<BorrowRequest>),
        (status = 401, description = "No active session")
    )
)]
pub async fn list_requests(
    State(state): State<crate::AppState>,
    ActingUser(_user): ActingUser,
) -> AppResult<Json<Vec<BorrowRequest>>> {
    Ok(Json(state.services.requests.list().await))
}

/// Get one borrow request
#[utoipa::path(
    get,
    path = "/requests/{id}",
    tag = "requests",
    params(("id" = i32, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request details", body = BorrowRequest),
        (status = 404, description = "Request not found")
    )
)]
pub async fn get_request(
    State(state): State<crate::AppState>,
    ActingUser(_user): ActingUser,
    Path(id): Path<i32>,
) -> AppResult<Json<BorrowRequest>> {
    let request = state.services.requests.get_by_id(id).await?;
    Ok(Json(request))
}

/// Submit a borrow request. Reserves a unit immediately when one is
/// available; routes to the waitlist when the pool is exhausted by an
/// overlapping active booking.
#[utoipa::path(
    post,
    path = "/requests",
    tag = "requests",
    request_body = CreateBorrowRequest,
    responses(
        (status = 201, description = "Request created", body = BorrowRequest),
        (status = 400, description = "Invalid dates or missing fields"),
        (status = 404, description = "Equipment or user not found"),
        (status = 409, description = "No inventory and no conflicting booking to wait behind")
    )
)]
pub async fn create_request(
    State(state): State<crate::AppState>,
    ActingUser(_user): ActingUser,
    Json(data): Json<CreateBorrowRequest>,
) -> AppResult<(StatusCode, Json<BorrowRequest>)> {
    data.validate()?;
    let request = state.services.requests.create(data).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// Apply a reviewer decision: approve, reject, issue or annotate
#[utoipa::path(
    post,
    path = "/requests/{id}/status",
    tag = "requests",
    params(("id" = i32, Path, description = "Request ID")),
    request_body = ReviewRequest,
    responses(
        (status = 200, description = "Request updated", body = BorrowRequest),
        (status = 403, description = "Role may not perform this action"),
        (status = 404, description = "Request not found"),
        (status = 409, description = "Transition not allowed from the current state")
    )
)]
pub async fn review_request(
    State(state): State<crate::AppState>,
    ActingUser(user): ActingUser,
    Path(id): Path<i32>,
    Json(review): Json<ReviewRequest>,
) -> AppResult<Json<BorrowRequest>> {
    let request = state.services.requests.review(&user, id, review).await?;
    Ok(Json(request))
}

/// Process a return: record condition and notes, finalize the fine, and
/// release the unit back to the pool
#[utoipa::path(
    post,
    path = "/requests/{id}/return",
    tag = "requests",
    params(("id" = i32, Path, description = "Request ID")),
    request_body = ProcessReturn,
    responses(
        (status = 200, description = "Return processed", body = BorrowRequest),
        (status = 403, description = "Role may not process returns"),
        (status = 404, description = "Request not found"),
        (status = 409, description = "Request is not issued")
    )
)]
pub async fn return_request(
    State(state): State<crate::AppState>,
    ActingUser(user): ActingUser,
    Path(id): Path<i32>,
    Json(data): Json<ProcessReturn>,
) -> AppResult<Json<BorrowRequest>> {
    let request = state.services.requests.process_return(&user, id, data).await?;
    Ok(Json(request))
}
