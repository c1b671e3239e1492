//! Shared domain enums and the request state machine

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Staff,
    Admin,
}

impl Role {
    /// School id prefix used when synthesizing users at login
    pub fn school_id_prefix(&self) -> &'static str {
        match self {
            Role::Student => "STU",
            Role::Staff => "STF",
            Role::Admin => "ADM",
        }
    }

    /// Permission table: which roles may perform which request actions.
    /// Enforced here regardless of what the UI chooses to display.
    pub fn may(&self, action: RequestAction) -> bool {
        match (self, action) {
            (_, RequestAction::Annotate) => true,
            (Role::Staff | Role::Admin, _) => true,
            (Role::Student, _) => false,
        }
    }

    /// Catalog management (create/edit/delete equipment)
    pub fn may_manage_catalog(&self) -> bool {
        matches!(self, Role::Staff | Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Role::Student => "student",
            Role::Staff => "staff",
            Role::Admin => "admin",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// EquipmentCategory
// ---------------------------------------------------------------------------

/// Equipment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EquipmentCategory {
    Lab,
    Sports,
    Music,
    Camera,
    #[serde(rename = "AV")]
    Av,
}

impl std::fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EquipmentCategory::Lab => "Lab",
            EquipmentCategory::Sports => "Sports",
            EquipmentCategory::Music => "Music",
            EquipmentCategory::Camera => "Camera",
            EquipmentCategory::Av => "AV",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// EquipmentCondition
// ---------------------------------------------------------------------------

/// Equipment condition. `Damaged` is only ever recorded at return time,
/// never as a catalog condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EquipmentCondition {
    Excellent,
    Good,
    Fair,
    Poor,
    Damaged,
}

// ---------------------------------------------------------------------------
// RequestStatus
// ---------------------------------------------------------------------------

/// Borrow request lifecycle state.
///
/// `Overdue` is a derived view over `Issued` with an elapsed end date; it is
/// reported to clients but never stored (see `BorrowRequest::effective_status`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Issued,
    Returned,
    Overdue,
    Waitlist,
}

impl RequestStatus {
    /// Terminal states admit no further transition
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestStatus::Rejected | RequestStatus::Returned)
    }

    /// Active requests are all non-terminal ones
    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }

    /// Statuses that hold a booking for conflict detection purposes
    pub fn blocks_bookings(&self) -> bool {
        matches!(self, RequestStatus::Approved | RequestStatus::Issued)
    }

    /// State machine: which stored-status transitions are legal, ignoring
    /// role checks and inventory effects.
    pub fn can_transition_to(&self, next: RequestStatus) -> bool {
        use RequestStatus::*;
        matches!(
            (self, next),
            (Pending, Approved)
                | (Pending, Rejected)
                | (Approved, Issued)
                | (Issued, Returned)
                | (Waitlist, Approved)
                | (Waitlist, Rejected)
        )
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ---------------------------------------------------------------------------
// RequestAction
// ---------------------------------------------------------------------------

/// Reviewer actions on a borrow request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RequestAction {
    Approve,
    Reject,
    Issue,
    Return,
    Annotate,
}

impl RequestAction {
    /// The stored status each reviewer action targets, if any
    pub fn target_status(&self) -> Option<RequestStatus> {
        match self {
            RequestAction::Approve => Some(RequestStatus::Approved),
            RequestAction::Reject => Some(RequestStatus::Rejected),
            RequestAction::Issue => Some(RequestStatus::Issued),
            RequestAction::Return => Some(RequestStatus::Returned),
            RequestAction::Annotate => None,
        }
    }
}
