//! The `PostStore` trait — the contract every post backend must fulfil.

use async_trait::async_trait;
use uuid::Uuid;

use crate::{NewPost, Page, Post, PostPatch, PostsPage, SearchFilter, StoreError};

/// Data access for posts.
///
/// Handlers only ever talk to this trait, so the HTTP layer can run against
/// Postgres in production and [`crate::InMemoryPostStore`] in tests.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Total number of posts.
    async fn count(&self) -> Result<u64, StoreError>;

    /// One page of posts, newest first.
    async fn list_page(&self, page: Page) -> Result<Vec<Post>, StoreError>;

    /// Every post matching `filter`, newest first. Not paginated.
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Post>, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Post, StoreError>;

    /// Validate and insert a post authored by `creator`.
    async fn create(&self, creator: &str, post: NewPost) -> Result<Post, StoreError>;

    /// Validate and apply a partial update.
    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Post, StoreError>;

    /// Remove a post, returning it as it was.
    async fn delete(&self, id: Uuid) -> Result<Post, StoreError>;

    /// Flip `user_id`'s like on the post and return the updated post.
    async fn toggle_like(&self, id: Uuid, user_id: &str) -> Result<Post, StoreError>;

    /// Count plus one page, shaped for the listing response.
    async fn list(&self, page: Page) -> Result<PostsPage, StoreError> {
        let total = self.count().await?;
        let data = self.list_page(page).await?;
        Ok(PostsPage::new(data, page, total))
    }
}
