//! In-memory user repository.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::user_repository::{user_exists, UserRepository};
use crate::config::RepositoryKind;
use crate::domain::{User, UserId};
use crate::errors::{AppResult, OptionExt};

/// Process-local store; contents are lost when the process exits.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<BTreeMap<UserId, User>>,
}

impl MemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserStore {
    fn kind(&self) -> RepositoryKind {
        RepositoryKind::Memory
    }

    async fn create(&self, id: UserId, full_name: String) -> AppResult<User> {
        let mut users = self.users.write().await;

        match users.entry(id) {
            Entry::Occupied(_) => Err(user_exists(id)),
            Entry::Vacant(slot) => {
                let user = slot.insert(User::new(id, full_name)).clone();
                tracing::debug!(id, "User stored in memory");
                Ok(user)
            }
        }
    }

    async fn get(&self, id: UserId) -> AppResult<User> {
        self.users.read().await.get(&id).cloned().ok_or_not_found()
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn update(&self, id: UserId, full_name: String) -> AppResult<User> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&id).ok_or_not_found()?;
        user.rename(full_name);
        tracing::debug!(id, "User renamed in memory");
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> AppResult<()> {
        self.users.write().await.remove(&id).ok_or_not_found()?;
        tracing::debug!(id, "User removed from memory");
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
