//! The like toggle.

/// Outcome of [`toggle_like`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeToggle {
    Liked,
    Unliked,
}

/// Flip `user_id`'s membership in `likes`.
///
/// Absent: the id is appended. Present: every matching entry is removed, so
/// a list that somehow held duplicates is repaired on the next toggle.
pub fn toggle_like(likes: &mut Vec<String>, user_id: &str) -> LikeToggle {
    if likes.iter().any(|id| id == user_id) {
        likes.retain(|id| id != user_id);
        LikeToggle::Unliked
    } else {
        likes.push(user_id.to_string());
        LikeToggle::Liked
    }
}
