//! UI Components
//!
//! Leptos components for the feed widget.

pub mod add_post_form;
pub mod post_card;
pub mod post_list;
pub mod share_panel;
pub mod toast;

pub use add_post_form::AddPostForm;
pub use post_card::PostCard;
pub use post_list::PostList;
pub use share_panel::SharePanel;
pub use toast::Toast;
