//! User model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::enums::Role;

/// User record. Created at signup or first login, immutable afterwards and
/// never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// School-issued identifier, e.g. `STU-2024-001`
    pub school_id: String,
}

/// Login request. A password field is accepted for UI compatibility but is
/// never verified: any email may log in under any role.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    pub password: Option<String>,
    pub role: Role,
}
