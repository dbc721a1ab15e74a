//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::UserRepository;

/// Application state shared by all handlers.
///
/// Holds the single repository built by the factory at startup.
#[derive(Clone)]
pub struct AppState {
    /// User repository (in-memory or database)
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// Create application state around a repository handle.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}
