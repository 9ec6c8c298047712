//! API error type and its HTTP mapping.
//!
//! Every failure becomes `{"message": "..."}` with one of three statuses:
//! 404 for not-found and read/query failures, 409 for failed writes, 401 for
//! missing or bad credentials.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use posts::StoreError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),
}

impl ApiError {
    pub fn post_not_found() -> Self {
        Self::NotFound("No post found".into())
    }

    /// Map a store failure on a read route. Everything is a 404.
    pub fn from_read(e: StoreError) -> Self {
        if let StoreError::Database(db) = &e {
            log_db_error("read", db);
        }
        Self::NotFound(e.to_string())
    }

    /// Map a store failure on a write route. A missing post stays 404,
    /// anything else is a 409.
    pub fn from_write(e: StoreError) -> Self {
        match e {
            StoreError::NotFound => Self::post_not_found(),
            StoreError::Validation(msg) => Self::Conflict(msg),
            StoreError::Database(db) => {
                log_db_error("write", &db);
                Self::Conflict(db.to_string())
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }
}

fn log_db_error(op: &str, e: &db::DbError) {
    if e.is_pool_timeout() {
        tracing::warn!("{op} failed: database pool exhausted");
    } else {
        tracing::error!("{op} failed: {e}");
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
