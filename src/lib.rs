//! Users API - A minimal user CRUD service
//!
//! Exposes create/read/update/delete/list over a single `User` entity.
//! Persistence is pluggable: a factory reads configuration once at
//! startup and builds either an in-memory or a MySQL-backed repository.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Configuration file, environment overrides and constants
//! - **domain**: The `User` entity
//! - **infra**: Repositories, database access and the repository factory
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server with options.json in the working directory
//! cargo run -- serve
//!
//! # Validate a configuration file
//! cargo run -- --config options.toml check
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{User, UserId};
pub use errors::{AppError, AppResult};
