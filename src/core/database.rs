use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::core::config::DatabaseConfig;
use crate::core::schema::EntitySchema;

/// Owns the single connection to the SQLite store and the schemas
/// materialized in it.
pub struct PersistenceGateway {
    pool: SqlitePool,
    schemas: Vec<&'static EntitySchema>,
}

impl std::fmt::Debug for PersistenceGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceGateway")
            .field("pool", &"<SqlitePool>")
            .field(
                "tables",
                &self.schemas.iter().map(|s| s.table).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl PersistenceGateway {
    /// Open the store, creating the database file when it is missing.
    ///
    /// The pool holds exactly one connection which is never recycled, so an
    /// in-memory database lives as long as the gateway does.
    pub async fn connect(
        config: &DatabaseConfig,
        schemas: Vec<&'static EntitySchema>,
    ) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self { pool, schemas })
    }

    /// Create every registered table that does not exist yet.
    pub async fn initialize(&self) -> Result<(), sqlx::Error> {
        for schema in &self.schemas {
            sqlx::query(&schema.create_table_sql())
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to create table {}: {:?}", schema.table, e);
                    e
                })?;
            tracing::debug!("Table {} ready", schema.table);
        }

        tracing::info!("Schema initialized for {} tables", self.schemas.len());
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connection closed");
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn schemas(&self) -> &[&'static EntitySchema] {
        &self.schemas
    }
}
