//! Business logic services

pub mod equipment;
pub mod fines;
pub mod requests;
pub mod sessions;
pub mod stats;
pub mod users;

use crate::{config::AppConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub sessions: sessions::SessionService,
    pub users: users::UsersService,
    pub equipment: equipment::EquipmentService,
    pub requests: requests::RequestsService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, config: &AppConfig) -> Self {
        Self {
            sessions: sessions::SessionService::new(repository.clone(), config.session.clone()),
            users: users::UsersService::new(repository.clone()),
            equipment: equipment::EquipmentService::new(repository.clone()),
            requests: requests::RequestsService::new(repository.clone(), config.loans.daily_fine_rate),
            stats: stats::StatsService::new(repository),
        }
    }
}
