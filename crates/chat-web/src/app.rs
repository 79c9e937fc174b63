//! Main App Component

use leptos::prelude::*;

use crate::widget::ChatWidget;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <ChatWidget />
        </main>
    }
}
