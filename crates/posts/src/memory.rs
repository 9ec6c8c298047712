//! `InMemoryPostStore` — a process-local `PostStore`.
//!
//! Used by the router tests and by `postboard serve --store memory` for
//! local runs without Postgres. Nothing is persisted.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{toggle_like, NewPost, Page, Post, PostPatch, PostStore, SearchFilter, StoreError};

/// Posts kept in insertion order; reads walk the list newest first.
#[derive(Default)]
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing posts, oldest first.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self { posts: RwLock::new(posts) }
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.posts.read().await.len() as u64)
    }

    async fn list_page(&self, page: Page) -> Result<Vec<Post>, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts
            .iter()
            .rev()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }

    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Post>, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().rev().filter(|p| filter.matches(p)).cloned().collect())
    }

    async fn get(&self, id: Uuid) -> Result<Post, StoreError> {
        let posts = self.posts.read().await;
        posts.iter().find(|p| p.id == id).cloned().ok_or(StoreError::NotFound)
    }

    async fn create(&self, creator: &str, post: NewPost) -> Result<Post, StoreError> {
        let post = post.validate()?;
        let post = Post {
            id: Uuid::new_v4(),
            title: post.title,
            message: post.message,
            name: post.name,
            creator: creator.to_string(),
            tags: post.tags,
            selected_file: post.selected_file,
            likes: Vec::new(),
            created_at: Utc::now(),
        };
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Post, StoreError> {
        let patch = patch.validate()?;
        let mut posts = self.posts.write().await;
        let post = posts.iter_mut().find(|p| p.id == id).ok_or(StoreError::NotFound)?;
        patch.apply(post);
        Ok(post.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<Post, StoreError> {
        let mut posts = self.posts.write().await;
        let index = posts.iter().position(|p| p.id == id).ok_or(StoreError::NotFound)?;
        Ok(posts.remove(index))
    }

    async fn toggle_like(&self, id: Uuid, user_id: &str) -> Result<Post, StoreError> {
        // Write lock held across read-modify-write.
        let mut posts = self.posts.write().await;
        let post = posts.iter_mut().find(|p| p.id == id).ok_or(StoreError::NotFound)?;
        toggle_like(&mut post.likes, user_id);
        Ok(post.clone())
    }
}
