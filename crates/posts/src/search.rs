//! Search filter: title substring OR tag membership.

use crate::Post;

/// Parsed `searchQuery` / `tags` parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    /// Literal title fragment, matched case-insensitively. Empty matches
    /// every title.
    pub title: String,
    /// Exact tag values; a post matches if it carries any of them.
    pub tags: Vec<String>,
}

impl SearchFilter {
    /// Build a filter from the raw query values. `tags` is comma-separated;
    /// a missing `searchQuery` is the empty fragment.
    pub fn from_query(search_query: Option<&str>, tags: &str) -> Self {
        let title = search_query.unwrap_or_default().to_string();

        let tags = tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        Self { title, tags }
    }

    pub fn matches(&self, post: &Post) -> bool {
        let title_hit = post.title.to_lowercase().contains(&self.title.to_lowercase());

        title_hit || post.tags.iter().any(|t| self.tags.contains(t))
    }
}
