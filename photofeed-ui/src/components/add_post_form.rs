//! Add Post Form Component
//!
//! Image path and caption inputs, shown on demand.

use leptos::*;

use crate::state::global::GlobalState;

/// Add-post form; hidden until `show_add_post_form` is called
#[component]
pub fn AddPostForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let image_ref = create_node_ref::<html::Input>();
    let caption_ref = create_node_ref::<html::Input>();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let (Some(image), Some(caption)) = (image_ref.get(), caption_ref.get()) else {
            return;
        };
        if state.add_post(&image.value(), &caption.value()) {
            image.set_value("");
            caption.set_value("");
        }
    };

    view! {
        <form
            id="add-post-form"
            class="add-post-form"
            style:display=move || if state.form_visible.get() { "block" } else { "none" }
            on:submit=on_submit
        >
            <label for="new-image-path">"Image path"</label>
            <input
                type="text"
                id="new-image-path"
                placeholder="images/my_photo.jpg"
                node_ref=image_ref
            />

            <label for="new-caption">"Caption"</label>
            <input
                type="text"
                id="new-caption"
                placeholder="Say something about it..."
                node_ref=caption_ref
            />

            <button type="submit">"Add post"</button>
            <button type="button" on:click=move |_| state.hide_add_post_form()>
                "Cancel"
            </button>
        </form>
    }
}
