//! `PostStore` backed by the `db` crate's Postgres repository.

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use db::{
    models::{InsertPost, UpdatePost},
    repository::posts as post_repo,
    DbPool,
};

use crate::{NewPost, Page, Post, PostPatch, PostStore, SearchFilter, StoreError};

#[derive(Clone)]
pub struct PgPostStore {
    pool: DbPool,
}

impl PgPostStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn count(&self) -> Result<u64, StoreError> {
        let total = post_repo::count_posts(&self.pool).await?;
        Ok(u64::try_from(total).unwrap_or(0))
    }

    async fn list_page(&self, page: Page) -> Result<Vec<Post>, StoreError> {
        let offset = page.offset() as i64;
        let limit = page.limit() as i64;
        let rows = post_repo::list_posts(&self.pool, offset, limit).await?;
        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Post>, StoreError> {
        debug!(title = %filter.title, tags = filter.tags.len(), "searching posts");
        let rows = post_repo::search_posts(&self.pool, &filter.title, &filter.tags).await?;
        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Post, StoreError> {
        Ok(post_repo::get_post(&self.pool, id).await?.into())
    }

    async fn create(&self, creator: &str, post: NewPost) -> Result<Post, StoreError> {
        let post = post.validate()?;
        let row = post_repo::create_post(
            &self.pool,
            InsertPost {
                title: &post.title,
                message: &post.message,
                name: &post.name,
                creator,
                tags: &post.tags,
                selected_file: post.selected_file.as_deref(),
            },
        )
        .await?;
        Ok(row.into())
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Post, StoreError> {
        let patch = patch.validate()?;
        let row = post_repo::update_post(
            &self.pool,
            id,
            UpdatePost {
                title: patch.title.as_deref(),
                message: patch.message.as_deref(),
                name: patch.name.as_deref(),
                tags: patch.tags.as_deref(),
                selected_file: patch.selected_file.as_deref(),
            },
        )
        .await?;
        Ok(row.into())
    }

    async fn delete(&self, id: Uuid) -> Result<Post, StoreError> {
        Ok(post_repo::delete_post(&self.pool, id).await?.into())
    }

    async fn toggle_like(&self, id: Uuid, user_id: &str) -> Result<Post, StoreError> {
        Ok(post_repo::toggle_like(&self.pool, id, user_id).await?.into())
    }
}
