//! Equipment catalog service

use crate::{
    error::{AppError, AppResult},
    models::{CreateEquipment, Equipment, UpdateEquipment, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List the full catalog
    pub async fn list(&self) -> Vec<Equipment> {
        self.repository.equipment.list().await
    }

    /// Get one equipment item
    pub async fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        self.repository.equipment.get_by_id(id).await
    }

    /// Add a catalog item (staff/admin only)
    pub async fn create(&self, actor: &User, data: CreateEquipment) -> AppResult<Equipment> {
        self.require_manager(actor)?;
        Ok(self.repository.equipment.create(data).await)
    }

    /// Edit a catalog item (staff/admin only)
    pub async fn update(&self, actor: &User, id: i32, data: UpdateEquipment) -> AppResult<Equipment> {
        self.require_manager(actor)?;
        self.repository.equipment.update(id, data).await
    }

    /// Remove a catalog item (staff/admin only); fails while active
    /// requests still reference it
    pub async fn delete(&self, actor: &User, id: i32) -> AppResult<()> {
        self.require_manager(actor)?;
        self.repository.equipment.delete(id).await
    }

    fn require_manager(&self, actor: &User) -> AppResult<()> {
        if !actor.role.may_manage_catalog() {
            return Err(AppError::Unauthorized(format!(
                "Role {} may not manage the catalog",
                actor.role
            )));
        }
        Ok(())
    }
}
