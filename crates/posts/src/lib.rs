//! `posts` crate — the post domain model, pagination and search rules, the
//! like toggle, and the [`PostStore`] seam with its Postgres and in-memory
//! implementations.

pub mod models;
pub mod error;
pub mod pagination;
pub mod search;
pub mod likes;
pub mod store;
pub mod postgres;
pub mod memory;

pub use models::{NewPost, Post, PostPatch};
pub use error::StoreError;
pub use pagination::{Page, PostsPage, PAGE_SIZE};
pub use search::SearchFilter;
pub use likes::{toggle_like, LikeToggle};
pub use store::PostStore;
pub use postgres::PgPostStore;
pub use memory::InMemoryPostStore;

#[cfg(test)]
mod store_tests;
