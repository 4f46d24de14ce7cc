//! Feed repository
//!
//! Read-modify-write access to the post collection stored under one key of a
//! `KeyValueStore`. Every operation loads the collection fresh, mutates one
//! post or appends one, then writes the whole collection back in a single
//! `set`. Nothing is cached between calls.

use crate::feed::error::{FeedError, FeedResult};
use crate::feed::share;
use crate::feed::store::KeyValueStore;
use crate::feed::types::{next_id, seed_posts, Post};
use tracing::{debug, info, warn};

/// Storage key the browser widget has always used
pub const DEFAULT_FEED_KEY: &str = "mySmartLocalSiteData";

/// Result of looking for shared data in a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The URL carries no share parameter; nothing changed
    NoSharedData,
    /// The local collection was replaced by the shared one
    Imported { posts: Vec<Post> },
}

/// Post collection persisted in a key-value store
#[derive(Debug)]
pub struct FeedRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> FeedRepository<S> {
    /// Repository over `store` using the default key
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_FEED_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Load the collection, seeding the store on first access
    ///
    /// A stored value that does not parse is reported as `FeedError::Corrupt`;
    /// it is never silently replaced. Use [`reset`](Self::reset) to recover.
    pub fn load(&mut self) -> FeedResult<Vec<Post>> {
        match self.store.get(&self.key)? {
            Some(raw) => {
                let posts: Vec<Post> = serde_json::from_str(&raw).map_err(|e| {
                    warn!(key = %self.key, error = %e, "Stored feed is corrupt");
                    FeedError::Corrupt {
                        key: self.key.clone(),
                        reason: e.to_string(),
                    }
                })?;
                debug!(key = %self.key, posts = posts.len(), "Loaded feed");
                Ok(posts)
            }
            None => {
                let seed = seed_posts();
                info!(key = %self.key, posts = seed.len(), "Seeding empty feed");
                self.save(&seed)?;
                Ok(seed)
            }
        }
    }

    /// Replace the stored collection
    pub fn save(&mut self, posts: &[Post]) -> FeedResult<()> {
        let raw = serde_json::to_string(posts)?;
        self.store.set(&self.key, &raw)?;
        debug!(key = %self.key, posts = posts.len(), bytes = raw.len(), "Saved feed");
        Ok(())
    }

    /// Add one like to post `id`
    ///
    /// Returns the updated post, or `None` (and writes nothing) if no post has
    /// that id.
    pub fn toggle_like(&mut self, id: u64) -> FeedResult<Option<Post>> {
        let mut posts = self.load()?;
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            debug!(id, "Like ignored: unknown post");
            return Ok(None);
        };

        post.like();
        let updated = post.clone();
        self.save(&posts)?;
        info!(id, likes = updated.likes, "Post liked");
        Ok(Some(updated))
    }

    /// Append a comment from the local user to post `id`
    ///
    /// The text is stored as given; it is only trimmed to decide whether it is
    /// blank. Returns `None` (and writes nothing) for an unknown id or blank
    /// text.
    pub fn add_comment(&mut self, id: u64, text: &str) -> FeedResult<Option<Post>> {
        let mut posts = self.load()?;
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            debug!(id, "Comment ignored: unknown post");
            return Ok(None);
        };
        if text.trim().is_empty() {
            debug!(id, "Comment ignored: blank text");
            return Ok(None);
        }

        post.push_comment(text);
        let updated = post.clone();
        self.save(&posts)?;
        info!(id, comments = updated.comments.len(), "Comment added");
        Ok(Some(updated))
    }

    /// Append a new post
    ///
    /// Both inputs are trimmed; if either ends up empty nothing is written and
    /// `FeedError::Validation` is returned.
    pub fn add_post(&mut self, image_path: &str, caption: &str) -> FeedResult<Post> {
        let image_path = image_path.trim();
        let caption = caption.trim();
        if image_path.is_empty() || caption.is_empty() {
            return Err(FeedError::Validation(
                "Please enter both an image path and a caption.".to_string(),
            ));
        }

        let mut posts = self.load()?;
        let post = Post::new(next_id(&posts)?, image_path, caption);
        posts.push(post.clone());
        self.save(&posts)?;
        info!(id = post.id, image_path = %post.image_path, "Post added");
        Ok(post)
    }

    /// Drop whatever is stored and write the seed collection again
    pub fn reset(&mut self) -> FeedResult<Vec<Post>> {
        self.store.remove(&self.key)?;
        warn!(key = %self.key, "Feed reset to seed content");
        self.load()
    }

    /// Build a share link for the current collection on top of `base_url`
    pub fn share_link(&mut self, base_url: &str) -> FeedResult<String> {
        let posts = self.load()?;
        let link = share::share_link(base_url, &posts)?;
        info!(posts = posts.len(), length = link.len(), "Share link created");
        Ok(link)
    }

    /// Import shared data carried by `url`
    ///
    /// A valid payload overwrites the local collection wholesale. On any
    /// decode or parse failure the error is returned and the store is left
    /// untouched.
    pub fn import_from_url(&mut self, url: &str) -> FeedResult<ImportOutcome> {
        let Some(payload) = share::shared_payload(url)? else {
            return Ok(ImportOutcome::NoSharedData);
        };

        let posts = share::decode(&payload).map_err(|e| {
            warn!(error = %e, "Rejected shared data");
            e
        })?;
        self.save(&posts)?;
        info!(posts = posts.len(), "Imported shared feed");
        Ok(ImportOutcome::Imported { posts })
    }
}
