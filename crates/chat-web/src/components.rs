//! UI Components

use chat_core::Message;
use leptos::prelude::*;

use crate::markdown::render_markdown;

/// Message bubble component.
///
/// The body goes through the Markdown boundary on every render; a message
/// that is still pending or streaming carries a `loading` class so the
/// host page can style the in-progress answer.
#[component]
pub fn MessageView(message: Message) -> impl IntoView {
    let mut class = format!("message message-{}", message.sender);
    if message.state.is_loading() {
        class.push_str(" loading");
    }
    let body = render_markdown(&message.text);

    view! {
        <div class=class>
            <span class="role">{message.sender.to_string()}</span>
            <div class="content" inner_html=body></div>
        </div>
    }
}
