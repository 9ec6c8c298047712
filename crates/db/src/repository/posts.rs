//! Post CRUD operations.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    DbError,
    models::{InsertPost, PostRow, UpdatePost},
};

const POST_COLUMNS: &str =
    "id, title, message, name, creator, tags, selected_file, likes, created_at";

/// Total number of posts.
pub async fn count_posts(pool: &PgPool) -> Result<i64, DbError> {
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await?;
    Ok(total)
}

/// Return one page of posts ordered newest first.
pub async fn list_posts(pool: &PgPool, offset: i64, limit: i64) -> Result<Vec<PostRow>, DbError> {
    let sql = format!(
        "SELECT {POST_COLUMNS} FROM posts ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2"
    );
    let rows = sqlx::query_as::<_, PostRow>(&sql)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

/// Return every post whose title contains `title_fragment` (case-insensitive)
/// or which carries at least one of `tags`.
///
/// An empty fragment matches every title; an empty `tags` slice never
/// matches.
pub async fn search_posts(
    pool: &PgPool,
    title_fragment: &str,
    tags: &[String],
) -> Result<Vec<PostRow>, DbError> {
    let sql = format!(
        r#"
        SELECT {POST_COLUMNS} FROM posts
        WHERE strpos(lower(title), lower($1::text)) > 0
           OR tags && $2::text[]
        ORDER BY created_at DESC, id DESC
        "#
    );
    let rows = sqlx::query_as::<_, PostRow>(&sql)
        .bind(title_fragment)
        .bind(tags)
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

/// Fetch a single post by its primary key.
pub async fn get_post(pool: &PgPool, id: Uuid) -> Result<PostRow, DbError> {
    let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1");
    let row = sqlx::query_as::<_, PostRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(DbError::NotFound)?;

    Ok(row)
}

/// Insert a new post. The id and `created_at` are assigned here.
pub async fn create_post(pool: &PgPool, post: InsertPost<'_>) -> Result<PostRow, DbError> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let sql = format!(
        r#"
        INSERT INTO posts
            (id, title, message, name, creator, tags, selected_file, likes, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, '{{}}', $8)
        RETURNING {POST_COLUMNS}
        "#
    );
    let row = sqlx::query_as::<_, PostRow>(&sql)
        .bind(id)
        .bind(post.title)
        .bind(post.message)
        .bind(post.name)
        .bind(post.creator)
        .bind(post.tags)
        .bind(post.selected_file)
        .bind(now)
        .fetch_one(pool)
        .await?;

    Ok(row)
}

/// Apply a partial update and return the updated row.
///
/// Returns `DbError::NotFound` if no row matched.
pub async fn update_post(
    pool: &PgPool,
    id: Uuid,
    changes: UpdatePost<'_>,
) -> Result<PostRow, DbError> {
    let sql = format!(
        r#"
        UPDATE posts
        SET title         = COALESCE($2, title),
            message       = COALESCE($3, message),
            name          = COALESCE($4, name),
            tags          = COALESCE($5, tags),
            selected_file = COALESCE($6, selected_file)
        WHERE id = $1
        RETURNING {POST_COLUMNS}
        "#
    );
    let row = sqlx::query_as::<_, PostRow>(&sql)
        .bind(id)
        .bind(changes.title)
        .bind(changes.message)
        .bind(changes.name)
        .bind(changes.tags)
        .bind(changes.selected_file)
        .fetch_optional(pool)
        .await?
        .ok_or(DbError::NotFound)?;

    Ok(row)
}

/// Permanently delete a post and return the row as it was.
///
/// Returns `DbError::NotFound` if no row was deleted.
pub async fn delete_post(pool: &PgPool, id: Uuid) -> Result<PostRow, DbError> {
    let sql = format!("DELETE FROM posts WHERE id = $1 RETURNING {POST_COLUMNS}");
    let row = sqlx::query_as::<_, PostRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(DbError::NotFound)?;

    Ok(row)
}

/// Flip `user_id`'s membership in the post's `likes` array.
///
/// Runs as one statement so concurrent toggles on the same row serialize on
/// the row lock instead of losing updates.
pub async fn toggle_like(pool: &PgPool, id: Uuid, user_id: &str) -> Result<PostRow, DbError> {
    let sql = format!(
        r#"
        UPDATE posts
        SET likes = CASE
            WHEN $2 = ANY(likes) THEN array_remove(likes, $2)
            ELSE array_append(likes, $2)
        END
        WHERE id = $1
        RETURNING {POST_COLUMNS}
        "#
    );
    let row = sqlx::query_as::<_, PostRow>(&sql)
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?
        .ok_or(DbError::NotFound)?;

    Ok(row)
}
