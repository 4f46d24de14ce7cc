//! Photofeed core
//!
//! - **types**: Post and Comment, seed content, id allocation
//! - **store**: key-value store backends (memory, file)
//! - **repository**: load/save plus the like, comment and add-post handlers
//! - **share**: share-link encoding and decoding
//! - **error**: error types
//!
//! # Data flow
//!
//! ```text
//! URL ──► share ──► repository.save ──► store
//! user action ──► repository (load → mutate → save) ──► re-render
//! ```
//!
//! # Example
//!
//! ```rust
//! use photofeed::feed::{FeedRepository, MemoryStore};
//!
//! let mut repo = FeedRepository::new(MemoryStore::new());
//! repo.toggle_like(2)?;
//! let post = repo.add_post("img/x.png", "hello")?;
//! assert_eq!(post.id, 3);
//!
//! let link = repo.share_link("https://example.com/index.html")?;
//! let mut other = FeedRepository::new(MemoryStore::new());
//! other.import_from_url(&link)?;
//! assert_eq!(other.load()?, repo.load()?);
//! # Ok::<(), photofeed::feed::FeedError>(())
//! ```

pub mod error;
pub mod repository;
pub mod share;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{FeedError, FeedResult};
pub use repository::{FeedRepository, ImportOutcome, DEFAULT_FEED_KEY};
pub use share::{shared_payload, strip_share_param, SHARE_PARAM};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use types::{next_id, seed_posts, Comment, Post, LOCAL_USER, NO_COMMENTS};
