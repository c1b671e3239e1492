//! Equipment model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::enums::{EquipmentCategory, EquipmentCondition};

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Equipment {
    pub id: i32,
    pub name: String,
    pub category: EquipmentCategory,
    pub condition: EquipmentCondition,
    /// Total units owned
    pub quantity: u32,
    /// Units currently loanable. Invariant: 0 <= available <= quantity.
    pub available: u32,
    pub image: Option<String>,
    pub description: Option<String>,
}

/// Create equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    #[validate(length(min = 1))]
    pub name: String,
    pub category: EquipmentCategory,
    pub condition: EquipmentCondition,
    pub quantity: u32,
    pub image: Option<String>,
    pub description: Option<String>,
}

/// Update equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEquipment {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub category: Option<EquipmentCategory>,
    pub condition: Option<EquipmentCondition>,
    pub quantity: Option<u32>,
    pub image: Option<String>,
    pub description: Option<String>,
}
