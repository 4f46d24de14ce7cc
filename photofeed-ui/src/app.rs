//! App Root Component
//!
//! Bootstraps the feed (shared-link import, then first render) and lays out
//! the page.

use leptos::*;

use crate::components::{AddPostForm, PostList, SharePanel, Toast};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_global_state();
    state.bootstrap();

    view! {
        <div class="feed">
            <header>
                <h1>"Photofeed"</h1>
                <button on:click=move |_| state.show_add_post_form()>"New post"</button>
            </header>

            <RecoveryPrompt />
            <AddPostForm />
            <SharePanel />
            <PostList />
            <Toast />
        </div>
    }
}

/// Shown when the stored feed cannot be read; offers to restore the samples
#[component]
fn RecoveryPrompt() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    move || {
        state.corrupt.get().map(|reason| view! {
            <div class="recovery">
                <p>"Your saved feed could not be read."</p>
                <p><small>{reason}</small></p>
                <button on:click=move |_| state.reset()>"Reset feed"</button>
            </div>
        })
    }
}
