//! Share Panel Component
//!
//! Creates a share link and shows it for manual copying.

use leptos::*;

use crate::state::global::GlobalState;

#[component]
pub fn SharePanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <section class="share-panel">
            <button on:click=move |_| state.share()>"Share my feed"</button>
            {move || {
                state.share_link.get().map(|link| view! {
                    <div>
                        <p>"Copy this link to share your likes and comments:"</p>
                        <input type="text" class="share-link" readonly=true prop:value=link />
                        <p>"(Opening the link replaces the recipient's feed.)"</p>
                    </div>
                })
            }}
        </section>
    }
}
