//! Borrow request model and related types

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::enums::{EquipmentCondition, RequestAction, RequestStatus};

/// Borrow request record.
///
/// `status` holds the stored lifecycle state; clients should read
/// `effective_status` so that overdue issued loans surface as `Overdue`
/// without a clock-driven background transition.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BorrowRequest {
    pub id: i32,
    pub equipment_id: i32,
    pub user_id: i32,
    /// Set at creation, immutable
    pub request_date: DateTime<Utc>,
    /// Inclusive booking range, start <= end
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub pickup_location: String,
    pub status: RequestStatus,
    /// Reviewer who approved, issued or rejected the request
    pub approved_by: Option<i32>,
    pub notes: Option<String>,
    pub return_date: Option<DateTime<Utc>>,
    /// Condition observed when the unit came back
    pub return_condition: Option<EquipmentCondition>,
    /// Final fine amount persisted at return
    pub fine: Option<Decimal>,
}

impl BorrowRequest {
    /// Reported status: `Issued` past its end date reads as `Overdue`
    pub fn effective_status(&self, today: NaiveDate) -> RequestStatus {
        if self.status == RequestStatus::Issued && today > self.end_date {
            RequestStatus::Overdue
        } else {
            self.status
        }
    }

    /// Inclusive range overlap: [s1,e1] and [s2,e2] overlap iff
    /// s1 <= e2 and s2 <= e1. Zero-length ranges count on the shared day.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && start <= self.end_date
    }
}

/// Create borrow request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBorrowRequest {
    pub equipment_id: i32,
    pub user_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(length(min = 1))]
    pub reason: String,
    #[validate(length(min = 1))]
    pub pickup_location: String,
}

/// Reviewer decision on a request (approve / reject / issue)
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReviewRequest {
    pub action: RequestAction,
    pub notes: Option<String>,
}

/// Return processing payload. `fine` overrides the computed default when set.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProcessReturn {
    pub condition: EquipmentCondition,
    pub notes: Option<String>,
    pub fine: Option<Decimal>,
}
