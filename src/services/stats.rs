//! Dashboard statistics service

use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::repository::Repository;

/// Request counts by effective status
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RequestStats {
    pub pending: usize,
    pub approved: usize,
    pub issued: usize,
    pub overdue: usize,
    pub waitlist: usize,
    pub rejected: usize,
    pub returned: usize,
}

/// Aggregate dashboard numbers
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardStats {
    /// Distinct catalog items
    pub equipment_items: usize,
    /// Total units owned across the catalog
    pub total_units: u32,
    /// Units currently loanable
    pub available_units: u32,
    pub users: usize,
    pub requests: RequestStats,
}

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn dashboard(&self) -> DashboardStats {
        let equipment = self.repository.equipment.list().await;
        let users = self.repository.users.list().await;
        let counts = self
            .repository
            .requests
            .count_by_effective_status(Utc::now().date_naive())
            .await;

        let by_status = |status: crate::models::RequestStatus| {
            counts
                .iter()
                .find(|(s, _)| *s == status)
                .map(|(_, n)| *n)
                .unwrap_or(0)
        };

        use crate::models::RequestStatus::*;
        DashboardStats {
            equipment_items: equipment.len(),
            total_units: equipment.iter().map(|e| e.quantity).sum(),
            available_units: equipment.iter().map(|e| e.available).sum(),
            users: users.len(),
            requests: RequestStats {
                pending: by_status(Pending),
                approved: by_status(Approved),
                issued: by_status(Issued),
                overdue: by_status(Overdue),
                waitlist: by_status(Waitlist),
                rejected: by_status(Rejected),
                returned: by_status(Returned),
            },
        }
    }
}
