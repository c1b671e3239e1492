//! Repository layer: the in-memory entity store

pub mod equipment;
pub mod requests;
pub mod seed;
pub mod users;

use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{BorrowRequest, Equipment, User},
};

/// The in-memory database owning the three entity collections.
///
/// A single lock guards all of them so that a lifecycle transition and its
/// paired availability mutation always commit as one step, even with the
/// server's worker threads running handlers in parallel.
#[derive(Debug, Default)]
pub struct Database {
    pub users: IndexMap<i32, User>,
    pub equipment: IndexMap<i32, Equipment>,
    pub requests: IndexMap<i32, BorrowRequest>,
    next_user_id: i32,
    next_equipment_id: i32,
    next_request_id: i32,
}

impl Database {
    pub fn next_user_id(&mut self) -> i32 {
        self.next_user_id += 1;
        self.next_user_id
    }

    pub fn next_equipment_id(&mut self) -> i32 {
        self.next_equipment_id += 1;
        self.next_equipment_id
    }

    pub fn next_request_id(&mut self) -> i32 {
        self.next_request_id += 1;
        self.next_request_id
    }

    /// Availability ledger: reserve one unit. Never goes below zero; an
    /// exhausted pool signals `InsufficientInventory` instead.
    pub fn decrement_available(&mut self, equipment_id: i32) -> AppResult<()> {
        let eq = self
            .equipment
            .get_mut(&equipment_id)
            .ok_or_else(|| AppError::NotFound(format!("Equipment with id {} not found", equipment_id)))?;
        if eq.available == 0 {
            return Err(AppError::InsufficientInventory(format!(
                "No units of '{}' left to reserve",
                eq.name
            )));
        }
        eq.available -= 1;
        Ok(())
    }

    /// Availability ledger: release one unit back to the pool, clamped at
    /// the total quantity owned.
    pub fn increment_available(&mut self, equipment_id: i32) -> AppResult<()> {
        let eq = self
            .equipment
            .get_mut(&equipment_id)
            .ok_or_else(|| AppError::NotFound(format!("Equipment with id {} not found", equipment_id)))?;
        eq.available = (eq.available + 1).min(eq.quantity);
        Ok(())
    }
}

/// Shared handle to the database
pub type Db = Arc<RwLock<Database>>;

/// Main repository struct holding the shared database handle
#[derive(Clone)]
pub struct Repository {
    pub db: Db,
    pub users: users::UsersRepository,
    pub equipment: equipment::EquipmentRepository,
    pub requests: requests::RequestsRepository,
}

impl Repository {
    /// Create a repository over an empty database
    pub fn new() -> Self {
        Self::from_database(Database::default())
    }

    /// Create a repository pre-populated with the demo catalog
    pub fn with_seed_data() -> Self {
        let mut database = Database::default();
        seed::populate(&mut database);
        Self::from_database(database)
    }

    fn from_database(database: Database) -> Self {
        let db: Db = Arc::new(RwLock::new(database));
        Self {
            users: users::UsersRepository::new(db.clone()),
            equipment: equipment::EquipmentRepository::new(db.clone()),
            requests: requests::RequestsRepository::new(db.clone()),
            db,
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
