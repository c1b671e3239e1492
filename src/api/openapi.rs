//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, equipment, health, requests, stats, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GearLoan API",
        version = "1.0.0",
        description = "School Equipment Lending System REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "GearLoan Team", email = "contact@gearloan.org")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::logout,
        auth::me,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        equipment::check_conflicts,
        // Requests
        requests::list_requests,
        requests::get_request,
        requests::create_request,
        requests::review_request,
        requests::return_request,
        // Users
        users::list_users,
        users::get_user_requests,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Health
            health::HealthResponse,
            // Auth
            crate::models::user::LoginRequest,
            crate::models::user::User,
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            equipment::ConflictResponse,
            // Requests
            crate::models::request::BorrowRequest,
            crate::models::request::CreateBorrowRequest,
            crate::models::request::ReviewRequest,
            crate::models::request::ProcessReturn,
            // Enums
            crate::models::enums::Role,
            crate::models::enums::EquipmentCategory,
            crate::models::enums::EquipmentCondition,
            crate::models::enums::RequestStatus,
            crate::models::enums::RequestAction,
            // Stats
            crate::services::stats::DashboardStats,
            crate::services::stats::RequestStats,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "auth", description = "Session management"),
        (name = "equipment", description = "Equipment catalog"),
        (name = "requests", description = "Borrow request lifecycle"),
        (name = "users", description = "User directory"),
        (name = "stats", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
