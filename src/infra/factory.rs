//! Repository factory.
//!
//! Turns validated configuration into a ready-to-use repository handle.
//! Called once at startup; the handle is then shared by every request.

use std::sync::Arc;

use super::repositories::{MemoryUserStore, SqlUserStore, UserRepository};
use crate::config::{BackendSettings, Config};
use crate::errors::AppResult;

/// Validate `config` and build the repository it selects.
///
/// An unknown `repo_type` or missing credentials fail with
/// `AppError::Configuration`; an unreachable database fails with
/// `AppError::Database`. Neither falls back to another backend.
pub async fn build(config: &Config) -> AppResult<Arc<dyn UserRepository>> {
    let backend = config.backend()?;
    build_from(&backend).await
}

/// Build the repository for already validated settings.
pub async fn build_from(backend: &BackendSettings) -> AppResult<Arc<dyn UserRepository>> {
    let repository: Arc<dyn UserRepository> = match backend {
        BackendSettings::Memory => Arc::new(MemoryUserStore::new()),
        BackendSettings::Database(settings) => Arc::new(SqlUserStore::connect(settings).await?),
    };

    tracing::info!("Working with {}", repository.kind());
    Ok(repository)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RepositoryKind, REPO_TYPE_MYSQL, REPO_TYPE_RAM};
    use crate::errors::AppError;

    #[tokio::test]
    async fn builds_memory_repository() {
        let repo = build(&Config::new(REPO_TYPE_RAM)).await.unwrap();
        assert_eq!(repo.kind(), RepositoryKind::Memory);
    }

    #[tokio::test]
    async fn unknown_repo_type_is_a_configuration_error() {
        let result = build(&Config::new("RepositoryCSV")).await;
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[tokio::test]
    async fn mysql_without_credentials_is_a_configuration_error() {
        let result = build(&Config::new(REPO_TYPE_MYSQL)).await;
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[tokio::test]
    async fn database_repository_from_url() {
        let config = Config::new(REPO_TYPE_MYSQL).with_database_url("sqlite::memory:");
        let repo = build(&config).await.unwrap();

        assert_eq!(repo.kind(), RepositoryKind::MySql);
        repo.ping().await.unwrap();
    }
}
