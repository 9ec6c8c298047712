//! Core domain models for posts.
//!
//! `Post` is what the API serialises; `NewPost` and `PostPatch` are the
//! client-supplied bodies for create and update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::StoreError;

// ---------------------------------------------------------------------------
// Post
// ---------------------------------------------------------------------------

/// A stored post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Store-assigned identifier.
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub message: String,
    /// Display name of the author.
    pub name: String,
    /// User id of the author, taken from the authenticated request.
    pub creator: String,
    pub tags: Vec<String>,
    pub selected_file: Option<String>,
    /// User ids that liked this post. Holds at most one entry per user.
    pub likes: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<db::models::PostRow> for Post {
    fn from(row: db::models::PostRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            message: row.message,
            name: row.name,
            creator: row.creator,
            tags: row.tags,
            selected_file: row.selected_file,
            likes: row.likes,
            created_at: row.created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// NewPost
// ---------------------------------------------------------------------------

/// Body of a create request. Server-owned fields (`creator`, `createdAt`,
/// `likes`) are not accepted from the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewPost {
    pub title: String,
    pub message: String,
    pub name: String,
    pub tags: Vec<String>,
    pub selected_file: Option<String>,
}

impl NewPost {
    /// Check the title and normalise tags.
    pub fn validate(mut self) -> Result<Self, StoreError> {
        self.title = validate_title(&self.title)?;
        self.tags = normalize_tags(self.tags);
        Ok(self)
    }
}

// ---------------------------------------------------------------------------
// PostPatch
// ---------------------------------------------------------------------------

/// Body of an update request. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub message: Option<String>,
    pub name: Option<String>,
    pub tags: Option<Vec<String>>,
    pub selected_file: Option<String>,
}

impl PostPatch {
    /// Same rules as [`NewPost::validate`], applied to the fields present.
    pub fn validate(mut self) -> Result<Self, StoreError> {
        if let Some(title) = self.title.as_deref() {
            self.title = Some(validate_title(title)?);
        }
        self.tags = self.tags.map(normalize_tags);
        Ok(self)
    }

    /// Apply the present fields onto `post`.
    pub fn apply(&self, post: &mut Post) {
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        if let Some(message) = &self.message {
            post.message = message.clone();
        }
        if let Some(name) = &self.name {
            post.name = name.clone();
        }
        if let Some(tags) = &self.tags {
            post.tags = tags.clone();
        }
        if let Some(file) = &self.selected_file {
            post.selected_file = Some(file.clone());
        }
    }
}

fn validate_title(title: &str) -> Result<String, StoreError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(StoreError::Validation("Post validation failed: title is required".into()));
    }
    Ok(title.to_string())
}

/// Trim tags, drop blanks and repeats, keep first-seen order.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_serialises_with_document_style_keys() {
        let post = Post {
            id: Uuid::nil(),
            title: "t".into(),
            message: String::new(),
            name: String::new(),
            creator: "u1".into(),
            tags: vec![],
            selected_file: None,
            likes: vec![],
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&post).unwrap();
        assert!(value.get("_id").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("selectedFile").is_some());
        assert!(value.get("id").is_none());
    }

    #[test]
    fn blank_title_is_rejected() {
        let new = NewPost { title: "   ".into(), ..Default::default() };
        assert!(matches!(new.validate(), Err(StoreError::Validation(_))));
    }

    #[test]
    fn tags_are_trimmed_and_deduplicated() {
        let tags = vec![" rust ".into(), "".into(), "rust".into(), "web".into()];
        assert_eq!(normalize_tags(tags), vec!["rust", "web"]);
    }

    #[test]
    fn client_cannot_set_creator_or_likes() {
        let new: NewPost = serde_json::from_str(
            r#"{"title":"hi","creator":"mallory","likes":["a","b"]}"#,
        )
        .unwrap();
        assert_eq!(new.title, "hi");
    }

    #[test]
    fn patch_applies_only_present_fields() {
        let mut post = Post {
            id: Uuid::nil(),
            title: "old".into(),
            message: "keep".into(),
            name: "n".into(),
            creator: "u1".into(),
            tags: vec!["a".into()],
            selected_file: None,
            likes: vec!["u2".into()],
            created_at: Utc::now(),
        };
        let patch = PostPatch { title: Some("new".into()), ..Default::default() };
        patch.apply(&mut post);
        assert_eq!(post.title, "new");
        assert_eq!(post.message, "keep");
        assert_eq!(post.likes, vec!["u2"]);
    }
}
