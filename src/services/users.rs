//! User directory service

use crate::{
    error::AppResult,
    models::User,
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all users
    pub async fn list(&self) -> Vec<User> {
        self.repository.users.list().await
    }

    /// Get one user
    pub async fn get_by_id(&self, id: i32) -> AppResult<User> {
        self.repository.users.get_by_id(id).await
    }
}
