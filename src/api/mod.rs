//! API handlers for GearLoan REST endpoints

pub mod auth;
pub mod equipment;
pub mod health;
pub mod openapi;
pub mod requests;
pub mod stats;
pub mod users;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, models::User, AppState};

/// Extractor for the acting user resolved from the process session.
///
/// This only establishes who is acting; whether they are allowed to act is
/// decided by the role permission table in the services, never by the UI.
pub struct ActingUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for ActingUser {
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let user = state
            .services
            .sessions
            .current()
            .await
            .ok_or_else(|| AppError::Authentication("No active session".to_string()))?;
        Ok(ActingUser(user))
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Session
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::me))
        // Equipment catalog
        .route("/equipment", get(equipment::list_equipment))
        .route("/equipment", post(equipment::create_equipment))
        .route("/equipment/:id", get(equipment::get_equipment))
        .route("/equipment/:id", put(equipment::update_equipment))
        .route("/equipment/:id", delete(equipment::delete_equipment))
        .route("/equipment/:id/conflicts", get(equipment::check_conflicts))
        // Borrow requests
        .route("/requests", get(requests::list_requests))
        .route("/requests", post(requests::create_request))
        .route("/requests/:id", get(requests::get_request))
        .route("/requests/:id/status", post(requests::review_request))
        .route("/requests/:id/return", post(requests::return_request))
        // Users
        .route("/users", get(users::list_users))
        .route("/users/:id/requests", get(users::get_user_requests))
        // Statistics
        .route("/stats", get(stats::get_stats))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
