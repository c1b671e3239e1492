//! Borrow request lifecycle service

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::{
    error::{AppError, AppResult},
    models::{
        BorrowRequest, CreateBorrowRequest, ProcessReturn, RequestAction, ReviewRequest, User,
    },
    repository::Repository,
};

use super::fines;

#[derive(Clone)]
pub struct RequestsService {
    repository: Repository,
    daily_fine_rate: Decimal,
}

impl RequestsService {
    pub fn new(repository: Repository, daily_fine_rate: Decimal) -> Self {
        Self {
            repository,
            daily_fine_rate,
        }
    }

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    /// Substitute the derived status so clients see Overdue without the
    /// stored state ever changing
    fn as_effective(mut request: BorrowRequest, today: NaiveDate) -> BorrowRequest {
        request.status = request.effective_status(today);
        request
    }

    /// List all requests with their effective status
    pub async fn list(&self) -> Vec<BorrowRequest> {
        let today = Self::today();
        self.repository
            .requests
            .list()
            .await
            .into_iter()
            .map(|r| Self::as_effective(r, today))
            .collect()
    }

    /// Get one request with its effective status
    pub async fn get_by_id(&self, id: i32) -> AppResult<BorrowRequest> {
        let request = self.repository.requests.get_by_id(id).await?;
        Ok(Self::as_effective(request, Self::today()))
    }

    /// List a user's requests with their effective status
    pub async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<BorrowRequest>> {
        // Verify user exists
        self.repository.users.get_by_id(user_id).await?;
        let today = Self::today();
        Ok(self
            .repository
            .requests
            .list_for_user(user_id)
            .await
            .into_iter()
            .map(|r| Self::as_effective(r, today))
            .collect())
    }

    /// Submit a borrow request. Inventory is reserved at creation time;
    /// exhausted inventory routes to the waitlist when the proposed range
    /// collides with an active booking, and fails otherwise.
    pub async fn create(&self, data: CreateBorrowRequest) -> AppResult<BorrowRequest> {
        if data.end_date < data.start_date {
            return Err(AppError::Validation(
                "End date must not be before start date".to_string(),
            ));
        }
        // Verify user exists
        self.repository.users.get_by_id(data.user_id).await?;
        self.repository.requests.create(data).await
    }

    /// Pure conflict query for a proposed booking range
    pub async fn check_conflict(&self, equipment_id: i32, start: NaiveDate, end: NaiveDate) -> AppResult<bool> {
        if end < start {
            return Err(AppError::Validation(
                "End date must not be before start date".to_string(),
            ));
        }
        // Verify equipment exists
        self.repository.equipment.get_by_id(equipment_id).await?;
        Ok(self.repository.requests.has_conflict(equipment_id, start, end).await)
    }

    /// Apply a reviewer decision (approve / reject / issue / annotate).
    /// The permission table is checked here once per transition; the UI
    /// hiding buttons is not enforcement.
    pub async fn review(&self, actor: &User, id: i32, review: ReviewRequest) -> AppResult<BorrowRequest> {
        self.require_permitted(actor, review.action)?;

        if review.action == RequestAction::Return {
            return Err(AppError::BadRequest(
                "Returns go through the return workflow".to_string(),
            ));
        }

        let today = Self::today();
        let request = match review.action.target_status() {
            Some(next) => {
                self.repository
                    .requests
                    .set_status(id, next, actor.id, review.notes)
                    .await?
            }
            None => self.repository.requests.annotate(id, actor.id, review.notes).await?,
        };
        tracing::info!(
            "Request {} moved to {} by {}",
            request.id,
            request.status,
            actor.email
        );
        Ok(Self::as_effective(request, today))
    }

    /// Finalize a return. The fine defaults to the computed late fee and
    /// the acting staff member's override, when present, is what persists.
    pub async fn process_return(&self, actor: &User, id: i32, data: ProcessReturn) -> AppResult<BorrowRequest> {
        self.require_permitted(actor, RequestAction::Return)?;

        let today = Self::today();
        let request = self.repository.requests.get_by_id(id).await?;
        let fine = data
            .fine
            .unwrap_or_else(|| fines::compute_fine(request.end_date, today, self.daily_fine_rate));
        if fine < Decimal::ZERO {
            return Err(AppError::Validation("Fine must not be negative".to_string()));
        }

        let returned = self
            .repository
            .requests
            .process_return(id, data.condition, data.notes, fine)
            .await?;
        tracing::info!("Request {} returned, fine {}", returned.id, fine);
        Ok(returned)
    }

    fn require_permitted(&self, actor: &User, action: RequestAction) -> AppResult<()> {
        if !actor.role.may(action) {
            return Err(AppError::Unauthorized(format!(
                "Role {} may not {:?} requests",
                actor.role, action
            )));
        }
        Ok(())
    }
}
