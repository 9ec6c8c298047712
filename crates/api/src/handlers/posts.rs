use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use posts::{NewPost, Page, Post, PostPatch, SearchFilter};

use crate::{
    auth::AuthUser,
    extract::{PostId, WriteJson},
    ApiError, AppState,
};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub search_query: Option<String>,
    pub tags: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub data: Vec<Post>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<posts::PostsPage>, ApiError> {
    let page = Page::parse(params.page.as_deref())
        .ok_or_else(|| ApiError::NotFound("page must be a positive integer".into()))?;

    debug!(page = page.number(), "listing posts");
    let result = state.store.list(page).await.map_err(ApiError::from_read)?;
    Ok(Json(result))
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResults>, ApiError> {
    let tags = params
        .tags
        .as_deref()
        .ok_or_else(|| ApiError::NotFound("tags query parameter is required".into()))?;
    let filter = SearchFilter::from_query(params.search_query.as_deref(), tags);
    debug!(?filter, "searching posts");

    let data = state.store.search(&filter).await.map_err(ApiError::from_read)?;
    Ok(Json(SearchResults { data }))
}

pub async fn get(
    PostId(id): PostId,
    State(state): State<AppState>,
) -> Result<Json<Post>, ApiError> {
    let post = state.store.get(id).await.map_err(ApiError::from_read)?;
    Ok(Json(post))
}

pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    WriteJson(payload): WriteJson<NewPost>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let post = state
        .store
        .create(&user.user_id, payload)
        .await
        .map_err(ApiError::from_write)?;

    info!(post_id = %post.id, creator = %post.creator, "post created");
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn update(
    user: AuthUser,
    PostId(id): PostId,
    State(state): State<AppState>,
    WriteJson(patch): WriteJson<PostPatch>,
) -> Result<Json<Post>, ApiError> {
    let post = state.store.update(id, patch).await.map_err(ApiError::from_write)?;

    debug!(post_id = %id, user = %user.user_id, "post updated");
    Ok(Json(post))
}

pub async fn delete(
    user: AuthUser,
    PostId(id): PostId,
    State(state): State<AppState>,
) -> Result<Json<Post>, ApiError> {
    let post = state.store.delete(id).await.map_err(ApiError::from_write)?;

    info!(post_id = %id, user = %user.user_id, "post deleted");
    Ok(Json(post))
}

pub async fn like(
    user: AuthUser,
    PostId(id): PostId,
    State(state): State<AppState>,
) -> Result<Json<Post>, ApiError> {
    let post = state
        .store
        .toggle_like(id, &user.user_id)
        .await
        .map_err(ApiError::from_write)?;

    debug!(post_id = %id, user = %user.user_id, likes = post.likes.len(), "like toggled");
    Ok(Json(post))
}
