//! Equipment repository

use crate::{
    error::{AppError, AppResult},
    models::{CreateEquipment, Equipment, UpdateEquipment},
};

use super::Db;

#[derive(Clone)]
pub struct EquipmentRepository {
    db: Db,
}

impl EquipmentRepository {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// List all equipment in insertion order
    pub async fn list(&self) -> Vec<Equipment> {
        self.db.read().await.equipment.values().cloned().collect()
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        self.db
            .read()
            .await
            .equipment
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Equipment with id {} not found", id)))
    }

    /// Create equipment. New items start fully available.
    pub async fn create(&self, data: CreateEquipment) -> Equipment {
        let mut db = self.db.write().await;
        let id = db.next_equipment_id();
        let equipment = Equipment {
            id,
            name: data.name,
            category: data.category,
            condition: data.condition,
            quantity: data.quantity,
            available: data.quantity,
            image: data.image,
            description: data.description,
        };
        db.equipment.insert(id, equipment.clone());
        equipment
    }

    /// Update equipment. A quantity change shifts `available` by the same
    /// delta so units out on loan stay out, clamped to [0, quantity].
    pub async fn update(&self, id: i32, data: UpdateEquipment) -> AppResult<Equipment> {
        let mut db = self.db.write().await;
        let eq = db
            .equipment
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Equipment with id {} not found", id)))?;

        if let Some(name) = data.name {
            eq.name = name;
        }
        if let Some(category) = data.category {
            eq.category = category;
        }
        if let Some(condition) = data.condition {
            eq.condition = condition;
        }
        if let Some(quantity) = data.quantity {
            let on_loan = eq.quantity - eq.available;
            eq.quantity = quantity;
            eq.available = quantity.saturating_sub(on_loan);
        }
        if data.image.is_some() {
            eq.image = data.image;
        }
        if data.description.is_some() {
            eq.description = data.description;
        }

        Ok(eq.clone())
    }

    /// Delete equipment. Refused while active requests still reference it.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let mut db = self.db.write().await;
        if !db.equipment.contains_key(&id) {
            return Err(AppError::NotFound(format!("Equipment with id {} not found", id)));
        }
        let has_active = db
            .requests
            .values()
            .any(|r| r.equipment_id == id && r.status.is_active());
        if has_active {
            return Err(AppError::BusinessRule(
                "Equipment has active requests and cannot be deleted".to_string(),
            ));
        }
        db.equipment.shift_remove(&id);
        Ok(())
    }
}
