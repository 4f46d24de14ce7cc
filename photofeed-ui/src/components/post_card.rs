//! Post Card Component
//!
//! One feed entry: image, caption, likes, comments and the comment box.

use leptos::*;
use photofeed::feed::{Post, NO_COMMENTS};

use crate::state::global::GlobalState;

/// Single post card
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let id = post.id;
    let comment_ref = create_node_ref::<html::Input>();

    // Comment submission: read the box, hand it to the repository, clear it
    let submit_comment = move |_| {
        if let Some(input) = comment_ref.get() {
            state.comment(id, &input.value());
            input.set_value("");
        }
    };

    let comments = if post.comments.is_empty() {
        view! { <li>{NO_COMMENTS}</li> }.into_view()
    } else {
        post.comments
            .into_iter()
            .map(|c| view! { <li><strong>{c.user}</strong>": "{c.text}</li> })
            .collect_view()
    };

    view! {
        <div class="post">
            <img src=post.image_path alt=post.caption.clone() />
            <p class="caption">{post.caption}</p>
            <p><strong>{likes_text(post.likes)}</strong></p>

            <button class="like-button" on:click=move |_| state.like(id)>
                {like_label(post.likes)}
            </button>

            <ul class="comment-list">{comments}</ul>

            <div>
                <input
                    type="text"
                    id=format!("comment-input-{}", id)
                    class="comment-input"
                    placeholder="Write a comment..."
                    node_ref=comment_ref
                />
                <button class="comment-button" on:click=submit_comment>"Send"</button>
            </div>
        </div>
    }
}

fn likes_text(likes: u64) -> String {
    format!("Likes: {}", likes)
}

fn like_label(likes: u64) -> String {
    format!("Like ({})", likes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_labels() {
        assert_eq!(likes_text(0), "Likes: 0");
        assert_eq!(like_label(12), "Like (12)");
    }
}
