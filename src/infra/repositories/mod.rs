//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern. Two interchangeable stores
//! implement [`UserRepository`]: one in process memory and one
//! over a relational database.

pub(crate) mod entities;
mod memory;
mod sql;
mod user_repository;

pub use memory::MemoryUserStore;
pub use sql::SqlUserStore;
pub use user_repository::UserRepository;

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
