//! Borrow requests repository: lifecycle transitions and their paired
//! availability mutations, committed under a single write guard.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::{
    error::{AppError, AppResult},
    models::{
        BorrowRequest, CreateBorrowRequest, EquipmentCondition, RequestStatus,
    },
};

use super::{Database, Db};

#[derive(Clone)]
pub struct RequestsRepository {
    db: Db,
}

/// Conflict detector over a database snapshot: does any Approved/Issued
/// request for this equipment overlap the proposed inclusive range?
fn booking_conflict(db: &Database, equipment_id: i32, start: NaiveDate, end: NaiveDate) -> bool {
    db.requests
        .values()
        .filter(|r| r.equipment_id == equipment_id && r.status.blocks_bookings())
        .any(|r| r.overlaps(start, end))
}

impl RequestsRepository {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Get request by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<BorrowRequest> {
        self.db
            .read()
            .await
            .requests
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Request with id {} not found", id)))
    }

    /// List all requests in insertion order
    pub async fn list(&self) -> Vec<BorrowRequest> {
        self.db.read().await.requests.values().cloned().collect()
    }

    /// List requests made by a user
    pub async fn list_for_user(&self, user_id: i32) -> Vec<BorrowRequest> {
        self.db
            .read()
            .await
            .requests
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Pure conflict query, no state is touched
    pub async fn has_conflict(&self, equipment_id: i32, start: NaiveDate, end: NaiveDate) -> bool {
        booking_conflict(&*self.db.read().await, equipment_id, start, end)
    }

    /// Create a borrow request.
    ///
    /// Reservation semantics: a unit is taken out of the pool at creation
    /// time, not at approval. With the pool exhausted the request is routed
    /// to the waitlist when an overlapping active booking exists (it holds
    /// no unit there), otherwise creation fails outright.
    pub async fn create(&self, data: CreateBorrowRequest) -> AppResult<BorrowRequest> {
        let mut db = self.db.write().await;

        let equipment = db
            .equipment
            .get(&data.equipment_id)
            .ok_or_else(|| AppError::NotFound(format!("Equipment with id {} not found", data.equipment_id)))?;

        let status = if equipment.available > 0 {
            RequestStatus::Pending
        } else if booking_conflict(&db, data.equipment_id, data.start_date, data.end_date) {
            RequestStatus::Waitlist
        } else {
            return Err(AppError::InsufficientInventory(format!(
                "No units of '{}' available",
                equipment.name
            )));
        };

        if status == RequestStatus::Pending {
            db.decrement_available(data.equipment_id)?;
        }

        let id = db.next_request_id();
        let request = BorrowRequest {
            id,
            equipment_id: data.equipment_id,
            user_id: data.user_id,
            request_date: Utc::now(),
            start_date: data.start_date,
            end_date: data.end_date,
            reason: data.reason,
            pickup_location: data.pickup_location,
            status,
            approved_by: None,
            notes: None,
            return_date: None,
            return_condition: None,
            fine: None,
        };
        db.requests.insert(id, request.clone());
        Ok(request)
    }

    /// Move a request to a new stored status, stamping the reviewer.
    ///
    /// Promoting from the waitlist consumes a unit at promotion time and
    /// fails when none is free. All other reviewed transitions leave the
    /// ledger alone (the unit was reserved at creation).
    pub async fn set_status(
        &self,
        id: i32,
        next: RequestStatus,
        reviewer_id: i32,
        notes: Option<String>,
    ) -> AppResult<BorrowRequest> {
        let mut db = self.db.write().await;

        let (current, equipment_id) = {
            let request = db
                .requests
                .get(&id)
                .ok_or_else(|| AppError::NotFound(format!("Request with id {} not found", id)))?;
            (request.status, request.equipment_id)
        };

        if current.is_terminal() {
            return Err(AppError::InvalidTransition(format!(
                "Request is {} and cannot change state",
                current
            )));
        }
        if !current.can_transition_to(next) {
            return Err(AppError::InvalidTransition(format!(
                "Cannot move request from {} to {}",
                current, next
            )));
        }

        if current == RequestStatus::Waitlist && next == RequestStatus::Approved {
            db.decrement_available(equipment_id)?;
        }

        let request = db
            .requests
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Request with id {} not found", id)))?;
        request.status = next;
        request.approved_by = Some(reviewer_id);
        if notes.is_some() {
            request.notes = notes;
        }
        Ok(request.clone())
    }

    /// Attach notes to a non-terminal request without changing its state
    pub async fn annotate(&self, id: i32, reviewer_id: i32, notes: Option<String>) -> AppResult<BorrowRequest> {
        let mut db = self.db.write().await;
        let request = db
            .requests
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Request with id {} not found", id)))?;
        if request.status.is_terminal() {
            return Err(AppError::InvalidTransition(format!(
                "Request is {} and cannot be annotated",
                request.status
            )));
        }
        request.approved_by = Some(reviewer_id);
        if notes.is_some() {
            request.notes = notes;
        }
        Ok(request.clone())
    }

    /// Finalize a return: stamp the return date, record the observed
    /// condition and the final fine, and release the unit back to the pool
    /// in the same step.
    pub async fn process_return(
        &self,
        id: i32,
        condition: EquipmentCondition,
        notes: Option<String>,
        fine: Decimal,
    ) -> AppResult<BorrowRequest> {
        let mut db = self.db.write().await;

        let (status, equipment_id) = {
            let request = db
                .requests
                .get(&id)
                .ok_or_else(|| AppError::NotFound(format!("Request with id {} not found", id)))?;
            (request.status, request.equipment_id)
        };

        // Overdue is a view over Issued, so Issued is the only stored
        // status a return can come from.
        if status != RequestStatus::Issued {
            return Err(AppError::InvalidTransition(format!(
                "Cannot return a request that is {}",
                status
            )));
        }

        db.increment_available(equipment_id)?;

        let request = db
            .requests
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Request with id {} not found", id)))?;
        request.status = RequestStatus::Returned;
        request.return_date = Some(Utc::now());
        request.return_condition = Some(condition);
        request.fine = Some(fine);
        if notes.is_some() {
            request.notes = notes;
        }
        Ok(request.clone())
    }

    /// Count requests grouped by effective status as of `today`
    pub async fn count_by_effective_status(&self, today: NaiveDate) -> Vec<(RequestStatus, usize)> {
        let db = self.db.read().await;
        let mut counts: Vec<(RequestStatus, usize)> = Vec::new();
        for status in [
            RequestStatus::Pending,
            RequestStatus::Approved,
            RequestStatus::Issued,
            RequestStatus::Overdue,
            RequestStatus::Waitlist,
            RequestStatus::Rejected,
            RequestStatus::Returned,
        ] {
            let n = db
                .requests
                .values()
                .filter(|r| r.effective_status(today) == status)
                .count();
            counts.push((status, n));
        }
        counts
    }
}
