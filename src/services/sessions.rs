//! Session management: the single acting user and its durable cache slot

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    config::SessionConfig,
    error::AppResult,
    models::{Role, User},
    repository::Repository,
};

/// Holds the current acting user for the process. The user record is
/// mirrored into a single-slot JSON file so a restart can restore the
/// session; nothing else is ever persisted.
#[derive(Clone)]
pub struct SessionService {
    repository: Repository,
    cache_path: PathBuf,
    current: Arc<RwLock<Option<User>>>,
}

impl SessionService {
    pub fn new(repository: Repository, config: SessionConfig) -> Self {
        Self {
            repository,
            cache_path: config.cache_path,
            current: Arc::new(RwLock::new(None)),
        }
    }

    /// Restore the session from the cache slot, if one was left behind.
    /// A missing or unreadable slot just means nobody is logged in.
    pub async fn restore(&self) {
        let raw = match tokio::fs::read(&self.cache_path).await {
            Ok(raw) => raw,
            Err(_) => return,
        };
        match serde_json::from_slice::<User>(&raw) {
            Ok(user) => {
                tracing::info!("Restored session for {}", user.email);
                *self.current.write().await = Some(user);
            }
            Err(e) => {
                tracing::warn!("Ignoring unreadable session cache: {}", e);
            }
        }
    }

    /// Log in by email under the given role. Unknown emails get a freshly
    /// synthesized user record; there is no password verification by design.
    pub async fn login(&self, email: &str, role: Role) -> AppResult<User> {
        let user = match self.repository.users.find_by_email(email).await {
            Some(user) => user,
            None => {
                let name = email.split('@').next().filter(|s| !s.is_empty()).unwrap_or("User");
                self.repository
                    .users
                    .create(name.to_string(), email.to_string(), role)
                    .await
            }
        };

        *self.current.write().await = Some(user.clone());
        self.write_slot(&user).await;
        tracing::info!("User {} logged in as {}", user.email, user.role);
        Ok(user)
    }

    /// Clear the session and the cache slot. Idempotent: logging out with
    /// no session is not an error.
    pub async fn logout(&self) {
        *self.current.write().await = None;
        if let Err(e) = tokio::fs::remove_file(&self.cache_path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to clear session cache: {}", e);
            }
        }
    }

    /// The current acting user, if any
    pub async fn current(&self) -> Option<User> {
        self.current.read().await.clone()
    }

    async fn write_slot(&self, user: &User) {
        let payload = match serde_json::to_vec_pretty(user) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Failed to serialize session cache: {}", e);
                return;
            }
        };
        if let Err(e) = tokio::fs::write(&self.cache_path, payload).await {
            // Cache failures never block a login
            tracing::warn!("Failed to write session cache: {}", e);
        }
    }
}
