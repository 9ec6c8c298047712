//! Typed error type for the db crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// The statement matched no `posts` row.
    #[error("post not found")]
    NotFound,

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl DbError {
    /// True when the pool could not hand out a connection in time.
    pub fn is_pool_timeout(&self) -> bool {
        matches!(self, Self::Sqlx(sqlx::Error::PoolTimedOut))
    }
}
