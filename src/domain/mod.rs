//! Domain layer - Core business entities
//!
//! The domain has no knowledge of storage backends or HTTP.

pub mod user;

pub use user::{User, UserId};
