//! Post List Component

use leptos::*;

use crate::components::PostCard;
use crate::state::global::GlobalState;

/// Every post in collection order
///
/// The list is rebuilt from scratch whenever `posts` changes.
#[component]
pub fn PostList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div id="posts-container">
            {move || {
                state.posts.get()
                    .into_iter()
                    .map(|post| view! { <PostCard post=post /> })
                    .collect_view()
            }}
        </div>
    }
}
