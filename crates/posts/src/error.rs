//! Store-level error types.

use thiserror::Error;

/// Errors produced by a [`crate::PostStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// No post exists with the requested id.
    #[error("No post found")]
    NotFound,

    /// The submitted post failed validation.
    #[error("{0}")]
    Validation(String),

    /// Persistence error from the db crate.
    #[error("database error: {0}")]
    Database(db::DbError),
}

impl From<db::DbError> for StoreError {
    fn from(e: db::DbError) -> Self {
        match e {
            db::DbError::NotFound => Self::NotFound,
            other => Self::Database(other),
        }
    }
}
