//! ask-chat Web Frontend
//!
//! Leptos-based WASM chat widget: one transcript, one input area, and a
//! streamed Markdown answer per question.

mod api;
mod app;
mod components;
mod markdown;
mod widget;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
