//! Toast Notification Component
//!
//! Shows success and error messages.

use leptos::*;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="toasts">
            {move || state.success.get().map(|msg| toast("toast toast-success", "✓", msg))}
            {move || state.error.get().map(|msg| toast("toast toast-error", "✕", msg))}
        </div>
    }
}

fn toast(class: &'static str, icon: &'static str, message: String) -> impl IntoView {
    view! {
        <div class=class role="status">
            <span>{icon}" "</span>
            <span>{message}</span>
        </div>
    }
}
