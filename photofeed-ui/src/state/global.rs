//! Global Application State
//!
//! Reactive state management using Leptos signals. The feed itself always
//! lives in `localStorage`; `posts` is only the last rendered copy and is
//! reloaded after every action.

use leptos::*;
use photofeed::feed::{self, FeedError, FeedRepository, FeedResult, ImportOutcome, Post};

use crate::storage::{self, LocalStore};

/// Message shown when a shared link was imported
pub const IMPORT_SUCCESS: &str = "Shared likes and comments loaded successfully!";
/// Message shown when a shared link could not be read
pub const IMPORT_FAILURE: &str = "Something went wrong while loading the shared data from the link.";

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Posts as last loaded from storage
    pub posts: RwSignal<Vec<Post>>,
    /// Whether the add-post form is shown
    pub form_visible: RwSignal<bool>,
    /// Most recently created share link
    pub share_link: RwSignal<Option<String>>,
    /// Set when the stored feed cannot be parsed
    pub corrupt: RwSignal<Option<String>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let state = GlobalState {
        posts: create_rw_signal(Vec::new()),
        form_visible: create_rw_signal(false),
        share_link: create_rw_signal(None),
        corrupt: create_rw_signal(None),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
    state
}

impl GlobalState {
    /// Run `op` against a freshly opened repository, reporting failures
    fn with_repo<T>(
        &self,
        op: impl FnOnce(&mut FeedRepository<LocalStore>) -> FeedResult<T>,
    ) -> Option<T> {
        match storage::repository().and_then(|mut repo| op(&mut repo)) {
            Ok(value) => Some(value),
            Err(e) if e.is_recoverable_by_reset() => {
                self.corrupt.set(Some(e.to_string()));
                None
            }
            Err(e) => {
                log_error(&e.to_string());
                self.show_error(&e.to_string());
                None
            }
        }
    }

    /// Re-render: reload the whole collection from storage
    pub fn refresh(&self) {
        if let Some(posts) = self.with_repo(|repo| repo.load()) {
            self.corrupt.set(None);
            self.posts.set(posts);
        }
    }

    /// Import shared data from the page URL, then render
    pub fn bootstrap(&self) {
        if let Some(href) = current_href() {
            match storage::repository().and_then(|mut repo| repo.import_from_url(&href)) {
                Ok(ImportOutcome::Imported { .. }) => {
                    self.show_success(IMPORT_SUCCESS);
                    clear_share_param(&href);
                }
                Ok(ImportOutcome::NoSharedData) => {}
                Err(e) => {
                    log_error(&format!("Failed to read shared data from link: {}", e));
                    self.show_error(IMPORT_FAILURE);
                }
            }
        }
        self.refresh();
    }

    pub fn like(&self, id: u64) {
        if self.with_repo(|repo| repo.toggle_like(id)).is_some() {
            self.refresh();
        }
    }

    /// Comment submission; blank text and unknown ids are ignored
    pub fn comment(&self, id: u64, text: &str) {
        if let Some(Some(_)) = self.with_repo(|repo| repo.add_comment(id, text)) {
            self.refresh();
        }
    }

    /// Add a post; returns whether it was added
    pub fn add_post(&self, image_path: &str, caption: &str) -> bool {
        match storage::repository().and_then(|mut repo| repo.add_post(image_path, caption)) {
            Ok(_) => {
                self.refresh();
                self.hide_add_post_form();
                true
            }
            Err(FeedError::Validation(msg)) => {
                self.show_error(&msg);
                false
            }
            Err(e) if e.is_recoverable_by_reset() => {
                self.corrupt.set(Some(e.to_string()));
                false
            }
            Err(e) => {
                log_error(&e.to_string());
                self.show_error(&e.to_string());
                false
            }
        }
    }

    /// Create a share link for the current page
    pub fn share(&self) {
        let Some(base) = current_href() else {
            return;
        };
        if let Some(link) = self.with_repo(|repo| repo.share_link(&base)) {
            self.share_link.set(Some(link));
        }
    }

    /// Replace a corrupt feed with the sample posts
    pub fn reset(&self) {
        if let Some(posts) = self.with_repo(|repo| repo.reset()) {
            self.corrupt.set(None);
            self.posts.set(posts);
            self.show_success("Feed restored");
        }
    }

    pub fn show_add_post_form(&self) {
        self.form_visible.set(true);
    }

    pub fn hide_add_post_form(&self) {
        self.form_visible.set(false);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

fn current_href() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

/// Rewrite the address bar without the share parameter so a reload does not
/// import again
fn clear_share_param(href: &str) {
    let Ok(clean) = feed::strip_share_param(href) else {
        return;
    };
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&clean)) {
            web_sys::console::warn_1(&e);
        }
    }
}

fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}
