//! `PgPostStore` against a live Postgres.
//!
//! Ignored by default. Run with:
//! `DATABASE_URL=postgres://... cargo test -p posts -- --ignored`

use posts::{NewPost, PgPostStore, PostPatch, PostStore, SearchFilter, StoreError};
use uuid::Uuid;

async fn store() -> Option<PgPostStore> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let pool = db::pool::create_pool(&url, 2).await.expect("connect");
    db::pool::run_migrations(&pool).await.expect("migrate");
    Some(PgPostStore::new(pool))
}

/// A tag no other test run will reuse, so assertions ignore foreign rows.
fn unique_tag() -> String {
    format!("t-{}", Uuid::new_v4().simple())
}

fn new_post(title: &str, tags: &[&str]) -> NewPost {
    NewPost {
        title: title.into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..Default::default()
    }
}

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn like_toggle_uses_array_membership() {
    let Some(store) = store().await else { return };
    let post = store.create("author", new_post("Likes", &[])).await.unwrap();

    let liked = store.toggle_like(post.id, "fan").await.unwrap();
    assert_eq!(liked.likes, vec!["fan"]);

    let other = store.toggle_like(post.id, "other").await.unwrap();
    assert_eq!(other.likes, vec!["fan", "other"]);

    let unliked = store.toggle_like(post.id, "fan").await.unwrap();
    assert_eq!(unliked.likes, vec!["other"]);

    store.delete(post.id).await.unwrap();
}

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn search_overlaps_tags_and_matches_title_case_insensitively() {
    let Some(store) = store().await else { return };
    let tag = unique_tag();
    let marker = Uuid::new_v4().simple().to_string();

    let tagged = store.create("u", new_post("Tagged", &[&tag])).await.unwrap();
    let titled = store
        .create("u", new_post(&format!("Title {}", marker.to_uppercase()), &[]))
        .await
        .unwrap();

    let found = store
        .search(&SearchFilter::from_query(Some(marker.as_str()), &format!("nope,{tag}")))
        .await
        .unwrap();
    let ids: Vec<Uuid> = found.iter().map(|p| p.id).collect();
    assert!(ids.contains(&tagged.id));
    assert!(ids.contains(&titled.id));

    let everything = store.search(&SearchFilter::from_query(Some(""), "")).await.unwrap();
    assert!(everything.iter().any(|p| p.id == tagged.id));

    store.delete(tagged.id).await.unwrap();
    store.delete(titled.id).await.unwrap();
}

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn update_and_delete_report_missing_rows() {
    let Some(store) = store().await else { return };
    let post = store.create("u", new_post("Before", &["a"])).await.unwrap();

    let patch = PostPatch { title: Some("After".into()), ..Default::default() };
    let updated = store.update(post.id, patch).await.unwrap();
    assert_eq!(updated.title, "After");
    assert_eq!(updated.tags, vec!["a"]);

    store.delete(post.id).await.unwrap();
    assert!(matches!(store.get(post.id).await, Err(StoreError::NotFound)));
    assert!(matches!(
        store.update(post.id, PostPatch::default()).await,
        Err(StoreError::NotFound)
    ));
}
