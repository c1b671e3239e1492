//! Data models for GearLoan

pub mod enums;
pub mod equipment;
pub mod request;
pub mod user;

// Re-export commonly used types
pub use enums::{EquipmentCategory, EquipmentCondition, RequestAction, RequestStatus, Role};
pub use equipment::{CreateEquipment, Equipment, UpdateEquipment};
pub use request::{BorrowRequest, CreateBorrowRequest, ProcessReturn, ReviewRequest};
pub use user::{LoginRequest, User};
