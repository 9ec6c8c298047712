//! Behavioural tests for `PostStore`, run against `InMemoryPostStore`.
//!
//! The Postgres store shares the same trait and the same validation, so
//! these cover the contract the HTTP layer depends on without a database.

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::{
    InMemoryPostStore, NewPost, Page, Post, PostPatch, PostStore, SearchFilter, StoreError,
};

fn new_post(title: &str, tags: &[&str]) -> NewPost {
    NewPost {
        title: title.into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..Default::default()
    }
}

/// `n` posts titled "post 0" .. "post n-1", oldest first.
fn seeded(n: usize) -> InMemoryPostStore {
    let start = Utc::now() - Duration::hours(n as i64);
    let posts = (0..n)
        .map(|i| Post {
            id: Uuid::new_v4(),
            title: format!("post {i}"),
            message: String::new(),
            name: String::new(),
            creator: "seed".into(),
            tags: vec![],
            selected_file: None,
            likes: vec![],
            created_at: start + Duration::hours(i as i64),
        })
        .collect();
    InMemoryPostStore::with_posts(posts)
}

// ============================================================
// Listing
// ============================================================

#[tokio::test]
async fn nine_posts_make_two_pages() {
    let store = seeded(9);

    let first = store.list(Page::new(1).unwrap()).await.unwrap();
    assert_eq!(first.number_of_pages, 2);
    assert_eq!(first.current_page, 1);
    assert_eq!(first.data.len(), 8);
    assert_eq!(first.data[0].title, "post 8", "newest first");

    let second = store.list(Page::new(2).unwrap()).await.unwrap();
    assert_eq!(second.data.len(), 1);
    assert_eq!(second.data[0].title, "post 0");
}

#[tokio::test]
async fn page_past_the_end_is_empty() {
    let store = seeded(3);
    let page = store.list(Page::new(4).unwrap()).await.unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.number_of_pages, 1);
}

#[tokio::test]
async fn empty_store_has_zero_pages() {
    let store = InMemoryPostStore::new();
    let page = store.list(Page::default()).await.unwrap();
    assert_eq!(page.number_of_pages, 0);
    assert!(page.data.is_empty());
}

// ============================================================
// Create / update / delete
// ============================================================

#[tokio::test]
async fn create_assigns_server_fields() {
    let store = InMemoryPostStore::new();
    let before = Utc::now();
    let post = store.create("user-1", new_post("Hello", &["a"])).await.unwrap();

    assert_eq!(post.creator, "user-1");
    assert!(post.likes.is_empty());
    assert!(post.created_at >= before);
    assert_eq!(store.get(post.id).await.unwrap(), post);
}

#[tokio::test]
async fn create_without_title_is_a_validation_error() {
    let store = InMemoryPostStore::new();
    let err = store.create("user-1", new_post("", &[])).await.unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn update_changes_only_given_fields() {
    let store = InMemoryPostStore::new();
    let post = store.create("user-1", new_post("Old", &["x"])).await.unwrap();

    let updated = store
        .update(post.id, PostPatch { message: Some("body".into()), ..Default::default() })
        .await
        .unwrap();

    assert_eq!(updated.title, "Old");
    assert_eq!(updated.message, "body");
    assert_eq!(updated.tags, vec!["x"]);
    assert_eq!(updated.created_at, post.created_at);
}

#[tokio::test]
async fn update_missing_post_is_not_found() {
    let store = InMemoryPostStore::new();
    let err = store.update(Uuid::new_v4(), PostPatch::default()).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound));
}

#[tokio::test]
async fn delete_returns_removed_post() {
    let store = InMemoryPostStore::new();
    let post = store.create("user-1", new_post("Bye", &[])).await.unwrap();

    let deleted = store.delete(post.id).await.unwrap();
    assert_eq!(deleted.id, post.id);
    assert!(matches!(store.get(post.id).await, Err(StoreError::NotFound)));
    assert!(matches!(store.delete(post.id).await, Err(StoreError::NotFound)));
}

// ============================================================
// Search
// ============================================================

#[tokio::test]
async fn search_matches_title_or_tags() {
    let store = InMemoryPostStore::new();
    store.create("u", new_post("Rust ownership", &[])).await.unwrap();
    store.create("u", new_post("Cooking", &["food"])).await.unwrap();
    store.create("u", new_post("Gardening", &["outdoors"])).await.unwrap();

    let filter = SearchFilter::from_query(Some("RUST"), "food");
    let found = store.search(&filter).await.unwrap();
    let titles: Vec<_> = found.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Cooking", "Rust ownership"]);
}

#[tokio::test]
async fn search_with_empty_query_returns_every_post() {
    let store = InMemoryPostStore::new();
    store.create("u", new_post("Rust ownership", &[])).await.unwrap();
    store.create("u", new_post("Cooking", &["food"])).await.unwrap();

    let found = store.search(&SearchFilter::from_query(Some(""), "")).await.unwrap();
    assert_eq!(found.len(), 2);
}

// ============================================================
// Likes
// ============================================================

#[tokio::test]
async fn like_toggle_round_trips() {
    let store = InMemoryPostStore::new();
    let post = store.create("author", new_post("Likeable", &[])).await.unwrap();

    let liked = store.toggle_like(post.id, "fan").await.unwrap();
    assert_eq!(liked.likes, vec!["fan"]);

    let unliked = store.toggle_like(post.id, "fan").await.unwrap();
    assert_eq!(unliked.likes, post.likes);
}

#[tokio::test]
async fn likes_hold_one_entry_per_user() {
    let store = InMemoryPostStore::new();
    let post = store.create("author", new_post("Popular", &[])).await.unwrap();

    store.toggle_like(post.id, "a").await.unwrap();
    store.toggle_like(post.id, "b").await.unwrap();
    store.toggle_like(post.id, "a").await.unwrap();
    let post = store.toggle_like(post.id, "a").await.unwrap();

    assert_eq!(post.likes, vec!["b", "a"]);
}
