//! User repository contract.

use async_trait::async_trait;

use crate::config::RepositoryKind;
use crate::domain::{User, UserId};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Every backend reports a missing id as [`AppError::NotFound`] and a
/// duplicate id as [`AppError::Conflict`]. Storage failures are returned
/// as [`AppError::Database`] and never folded into those outcomes.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Backend variant serving this repository
    fn kind(&self) -> RepositoryKind;

    /// Insert a new user; fails if `id` is already taken
    async fn create(&self, id: UserId, full_name: String) -> AppResult<User>;

    /// Find a user by ID
    async fn get(&self, id: UserId) -> AppResult<User>;

    /// List all users ordered by ID
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Replace the full name of an existing user
    async fn update(&self, id: UserId, full_name: String) -> AppResult<User>;

    /// Remove a user
    async fn delete(&self, id: UserId) -> AppResult<()>;

    /// Check that the backing store is reachable
    async fn ping(&self) -> AppResult<()>;
}

/// Conflict error for a taken user id
pub(crate) fn user_exists(id: UserId) -> AppError {
    AppError::conflict(format!("User with id={}", id))
}
