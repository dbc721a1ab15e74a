//! Database connection and table bootstrap.

use sea_orm::sea_query::Table;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Schema,
    Statement,
};

use crate::config::DatabaseSettings;
use crate::infra::repositories::entities::UserEntity;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the connection pool and make sure the `users` table exists.
    ///
    /// With `reset_table` set the table is dropped first, so the store
    /// starts empty.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(settings.url().to_owned());
        options
            .max_connections(settings.max_connections)
            .min_connections(1)
            .connect_timeout(settings.connect_timeout)
            .acquire_timeout(settings.connect_timeout)
            .sqlx_logging(false);

        let connection = SeaDatabase::connect(options).await?;
        let database = Self { connection };

        database.prepare_schema(settings.reset_table).await?;
        tracing::info!("Database connected and users table ready");

        Ok(database)
    }

    /// Create the `users` table if absent, dropping it first when `reset` is set.
    pub async fn prepare_schema(&self, reset: bool) -> Result<(), DbErr> {
        let backend = self.connection.get_database_backend();

        if reset {
            let drop = Table::drop().table(UserEntity).if_exists().to_owned();
            self.connection.execute(backend.build(&drop)).await?;
            tracing::debug!("Dropped users table from previous runs");
        }

        let mut create = Schema::new(backend).create_table_from_entity(UserEntity);
        create.if_not_exists();
        self.connection.execute(backend.build(&create)).await?;

        Ok(())
    }

    /// Get a reference to the database connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}
