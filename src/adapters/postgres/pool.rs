//! Connection pool construction and startup migrations.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Builds the shared pool from configuration and, when enabled, applies
/// pending migrations before handing the pool out.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect(&config.url)
        .await
        .map_err(|err| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to connect to database: {}", err),
            )
        })?;

    if config.run_migrations {
        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await.map_err(|err| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to run migrations: {}", err),
            )
        })?;
    }

    Ok(pool)
}
