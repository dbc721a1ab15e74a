//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Repository selection
// =============================================================================

/// `repo_type` value selecting the in-memory repository
pub const REPO_TYPE_RAM: &str = "RepositoryRAM";

/// `repo_type` value selecting the MySQL repository
pub const REPO_TYPE_MYSQL: &str = "RepositoryMySQL";

// =============================================================================
// Configuration sources
// =============================================================================

/// Configuration file read when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "options.json";

/// Prefix of environment variables overriding file settings (`USERS_REPO_TYPE`, ...)
pub const ENV_PREFIX: &str = "USERS";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Default MySQL host
pub const DEFAULT_DB_HOST: &str = "localhost";

/// Default MySQL port
pub const DEFAULT_DB_PORT: u16 = 3306;

/// Default database (schema) name
pub const DEFAULT_DB_NAME: &str = "sample_database";

/// Pool size; one connection unless configured otherwise
pub const DEFAULT_MAX_CONNECTIONS: u32 = 1;

/// Seconds to wait for a connection before giving up
pub const DEFAULT_CONNECT_TIMEOUT_SECONDS: u64 = 10;

