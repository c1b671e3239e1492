//! Users repository

use crate::{
    error::{AppError, AppResult},
    models::{Role, User},
};

use super::Db;

#[derive(Clone)]
pub struct UsersRepository {
    db: Db,
}

impl UsersRepository {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<User> {
        self.db
            .read()
            .await
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// Find user by email (case-insensitive)
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        self.db
            .read()
            .await
            .users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    /// List all users in insertion order
    pub async fn list(&self) -> Vec<User> {
        self.db.read().await.users.values().cloned().collect()
    }

    /// Create a user record with a generated id and school id
    pub async fn create(&self, name: String, email: String, role: Role) -> User {
        let mut db = self.db.write().await;
        let id = db.next_user_id();
        let user = User {
            id,
            name,
            email,
            role,
            school_id: format!("{}-2024-{:03}", role.school_id_prefix(), id),
        };
        db.users.insert(id, user.clone());
        user
    }
}
