//! Infrastructure layer - External systems integration
//!
//! This module handles all storage concerns:
//! - Database connection and table bootstrap
//! - Repository implementations
//! - The factory selecting a repository from configuration

pub mod db;
pub mod factory;
pub mod repositories;

pub use db::Database;
pub use repositories::{MemoryUserStore, SqlUserStore, UserRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
