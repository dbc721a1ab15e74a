//! SeaORM-backed user repository.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Set, SqlErr,
};

use super::entities::{UserActiveModel, UserColumn, UserEntity};
use super::user_repository::{user_exists, UserRepository};
use crate::config::{DatabaseSettings, RepositoryKind};
use crate::domain::{User, UserId};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::db::Database;

/// Relational store over the `users` table.
pub struct SqlUserStore {
    database: Database,
}

impl SqlUserStore {
    /// Wrap an already prepared database
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// Connect using `settings` and prepare the `users` table.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, DbErr> {
        let database = Database::connect(settings).await?;
        Ok(Self::new(database))
    }

    fn db(&self) -> &DatabaseConnection {
        self.database.connection()
    }

    async fn find(&self, id: UserId) -> AppResult<Option<User>> {
        let model = UserEntity::find_by_id(id).one(self.db()).await?;
        Ok(model.map(User::from))
    }
}

#[async_trait]
impl UserRepository for SqlUserStore {
    fn kind(&self) -> RepositoryKind {
        RepositoryKind::MySql
    }

    async fn create(&self, id: UserId, full_name: String) -> AppResult<User> {
        if self.find(id).await?.is_some() {
            return Err(user_exists(id));
        }

        let active = UserActiveModel {
            id: Set(id),
            full_name: Set(full_name.clone()),
        };

        // A concurrent insert of the same id can still slip past the probe
        UserEntity::insert(active)
            .exec_without_returning(self.db())
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => user_exists(id),
                _ => AppError::from(e),
            })?;

        tracing::debug!(id, "User inserted");
        Ok(User::new(id, full_name))
    }

    async fn get(&self, id: UserId) -> AppResult<User> {
        self.find(id).await?.ok_or_not_found()
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(UserColumn::Id)
            .all(self.db())
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn update(&self, id: UserId, full_name: String) -> AppResult<User> {
        let result = UserEntity::update_many()
            .col_expr(UserColumn::FullName, Expr::value(full_name.clone()))
            .filter(UserColumn::Id.eq(id))
            .exec(self.db())
            .await?;

        // MySQL reports zero affected rows when the name is unchanged,
        // so only a missing row means NotFound.
        if result.rows_affected == 0 {
            self.find(id).await?.ok_or_not_found()?;
        }

        tracing::debug!(id, "User updated");
        Ok(User::new(id, full_name))
    }

    async fn delete(&self, id: UserId) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id).exec(self.db()).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        tracing::debug!(id, "User deleted");
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        self.database.ping().await.map_err(AppError::from)
    }
}
