//! Row structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models — they carry no domain behaviour.
//! Domain types live in the `posts` crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted post row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PostRow {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub name: String,
    /// User id of the author.
    pub creator: String,
    pub tags: Vec<String>,
    pub selected_file: Option<String>,
    /// User ids that liked the post, one entry per user.
    pub likes: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Column values for a new `posts` row.
#[derive(Debug, Clone)]
pub struct InsertPost<'a> {
    pub title: &'a str,
    pub message: &'a str,
    pub name: &'a str,
    pub creator: &'a str,
    pub tags: &'a [String],
    pub selected_file: Option<&'a str>,
}

/// Column values for a partial update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdatePost<'a> {
    pub title: Option<&'a str>,
    pub message: Option<&'a str>,
    pub name: Option<&'a str>,
    pub tags: Option<&'a [String]>,
    pub selected_file: Option<&'a str>,
}
