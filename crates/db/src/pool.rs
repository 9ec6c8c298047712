//! Postgres connection pool.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::DbError;

/// Type alias for the shared Postgres pool used by the post store.
pub type DbPool = PgPool;

/// How long a request waits for a free connection before failing.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a new connection pool from the given `database_url`.
///
/// `max_connections` controls the pool ceiling.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, DbError> {
    info!(max_connections, "Connecting to database");
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Apply the embedded migrations from `migrations/` at the workspace root.
pub async fn run_migrations(pool: &DbPool) -> Result<(), DbError> {
    info!("Running database migrations");
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}
