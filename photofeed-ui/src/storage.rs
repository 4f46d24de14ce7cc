//! Browser Storage Backend
//!
//! `localStorage` as the feed's key-value store.

use photofeed::feed::{FeedError, FeedRepository, FeedResult, KeyValueStore};
use wasm_bindgen::JsValue;

/// Handle on `window.localStorage`
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    /// Open the page's local storage
    pub fn open() -> FeedResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| FeedError::Storage("no window available".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| FeedError::Storage("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> FeedResult<Option<String>> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> FeedResult<()> {
        self.storage.set_item(key, value).map_err(js_error)
    }

    fn remove(&mut self, key: &str) -> FeedResult<()> {
        self.storage.remove_item(key).map_err(js_error)
    }
}

/// Repository over local storage, opened fresh for each user action
pub fn repository() -> FeedResult<FeedRepository<LocalStore>> {
    Ok(FeedRepository::new(LocalStore::open()?))
}

fn js_error(err: JsValue) -> FeedError {
    FeedError::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
