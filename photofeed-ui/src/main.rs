//! Photofeed Widget
//!
//! Single-page photo feed built with Leptos (WASM).
//!
//! # Features
//!
//! - Posts with likes and comments, stored in `localStorage`
//! - Add-post form
//! - Share links carrying the whole feed
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All feed logic lives in the `photofeed` crate; this crate
//! supplies the `localStorage` backend and the view.

use leptos::*;

mod app;
mod components;
mod state;
mod storage;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
