//! Custom Axum extractors

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use uuid::Uuid;

use crate::ApiError;

/// A post id taken from the path. Malformed ids are a 404, decided before
/// the store is touched.
#[derive(Debug, Clone, Copy)]
pub struct PostId(pub Uuid);

impl<S> FromRequestParts<S> for PostId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::post_not_found())?;

        Uuid::parse_str(id.trim())
            .map(Self)
            .map_err(|_| ApiError::post_not_found())
    }
}

/// JSON body for write routes. A body that fails to parse is a 409 like
/// any other failed write.
#[derive(Debug, Clone)]
pub struct WriteJson<T>(pub T);

impl<S, T> FromRequest<S> for WriteJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::Conflict(e.body_text()))?;
        Ok(Self(value))
    }
}
