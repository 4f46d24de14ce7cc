//! Core data types for the photo feed
//!
//! - `Post`: a feed entry with an image reference, caption, likes and comments
//! - `Comment`: text attached to a post by the local user
//!
//! Field names serialize in camelCase so the persisted document and the
//! share payload keep the same JSON shape the browser widget writes.

use crate::feed::error::{FeedError, FeedResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Display name attached to every comment written on this device
pub const LOCAL_USER: &str = "Me (local user)";

/// Line shown in place of an empty comment list
pub const NO_COMMENTS: &str = "No comments yet. Be the first to comment!";

/// A single feed entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique within the collection, stable for the post's lifetime
    pub id: u64,
    /// Reference to the image resource (not checked for existence)
    pub image_path: String,
    pub caption: String,
    #[serde(default)]
    pub likes: u64,
    /// Append-only, insertion order preserved
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    /// Create a post with no likes and no comments
    pub fn new(id: u64, image_path: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            id,
            image_path: image_path.into(),
            caption: caption.into(),
            likes: 0,
            comments: Vec::new(),
        }
    }

    /// Register one like
    pub fn like(&mut self) {
        self.likes = self.likes.saturating_add(1);
    }

    /// Append a comment from the local user
    pub fn push_comment(&mut self, text: impl Into<String>) {
        self.comments.push(Comment::local(text));
    }
}

/// A comment on a post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub user: String,
    pub text: String,
}

impl Comment {
    /// Comment authored by the local actor
    pub fn local(text: impl Into<String>) -> Self {
        Self {
            user: LOCAL_USER.to_string(),
            text: text.into(),
        }
    }
}

/// Built-in content written on first access to an empty store
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post::new(
            1,
            "images/first_post_image.jpg",
            "Welcome to my very first post! Have a lovely day.",
        ),
        Post::new(
            2,
            "images/second_post_image.png",
            "A new sunset photo, what a view! ✨",
        ),
    ]
}

/// Next free id: one past the current maximum, or 1 for an empty collection
///
/// Fails once the maximum id is `u64::MAX - 1`: the next id would be the
/// reserved `u64::MAX`.
pub fn next_id(posts: &[Post]) -> FeedResult<u64> {
    let Some(max) = posts.iter().map(|p| p.id).max() else {
        return Ok(1);
    };
    max.checked_add(1)
        .filter(|id| *id != u64::MAX)
        .ok_or_else(|| FeedError::Validation("No post ids left in this feed.".to_string()))
}

/// Check collection-level invariants: ids positive, below `u64::MAX`, unique
pub fn validate_collection(posts: &[Post]) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(posts.len());
    for post in posts {
        if post.id == 0 || post.id == u64::MAX {
            return Err(format!("invalid post id {}", post.id));
        }
        if !seen.insert(post.id) {
            return Err(format!("duplicate post id {}", post.id));
        }
    }
    Ok(())
}
