//! # Photofeed
//!
//! A local-first photo feed: a list of posts (image reference, caption, like
//! count, comments) kept as one JSON document in a key-value store, with
//! likes, comments, new posts, and link-based sharing of the whole feed.
//!
//! ## Modules
//!
//! - [`feed`]: data model, store backends, repository and share codec
//! - [`config`]: configuration for the native command-line host (`cli` feature)
//!
//! The `feed` module has no platform dependencies and builds for
//! `wasm32-unknown-unknown`; the browser widget in `photofeed-ui` plugs
//! `localStorage` in as its store.

pub mod feed;

#[cfg(feature = "cli")]
pub mod config;

// Re-export top-level types for convenience
pub use feed::{
    Comment, FeedError, FeedRepository, FeedResult, FileStore, ImportOutcome, KeyValueStore,
    MemoryStore, Post,
};

#[cfg(feature = "cli")]
pub use config::{Config, ConfigError, LoggingConfig, ShareConfig, StorageConfig};
