//! Chat Widget
//!
//! The single interactive component: transcript view, auto-sizing input
//! area, and the task that folds a streamed answer into the open bot
//! message.

use leptos::html;
use leptos::prelude::*;

use chat_core::{MessageId, StreamDecoder, Transcript};
use futures::StreamExt;

use crate::api::AskClient;
use crate::components::MessageView;

/// Chat widget: transcript plus input area.
///
/// All state lives in the `Transcript` signal; the view derives
/// everything else from it, including whether a request is in flight.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let (transcript, set_transcript) = signal(Transcript::new());
    let (draft, set_draft) = signal(String::new());

    let in_flight = Memo::new(move |_| transcript.with(|t| t.has_open_exchange()));

    let input_ref: NodeRef<html::Textarea> = NodeRef::new();
    let list_ref: NodeRef<html::Div> = NodeRef::new();

    // Keep the newest entry in view whenever the transcript changes.
    Effect::new(move |_| {
        transcript.track();
        if let Some(list) = list_ref.get() {
            list.set_scroll_top(list.scroll_height());
        }
    });

    let send = move || {
        // begin_exchange ignores empty drafts and refuses to open a
        // second round while one is streaming.
        let mut opened = None;
        set_transcript.update(|t| opened = t.begin_exchange(&draft.get_untracked()));
        let Some(exchange) = opened else { return };

        let question = transcript.with_untracked(|t| {
            t.get(exchange.user).map(|m| m.text.clone()).unwrap_or_default()
        });

        set_draft.set(String::new());
        collapse(&input_ref);

        leptos::task::spawn_local(async move {
            match run_exchange(set_transcript, exchange.bot, &question).await {
                Ok(()) => set_transcript.update(|t| t.complete(exchange.bot)),
                Err(err) => {
                    leptos::logging::error!("exchange failed: {err}");
                    set_transcript.update(|t| t.fail(exchange.bot));
                }
            }
        });
    };

    view! {
        <div class="chat">
            <div class="messages" node_ref=list_ref>
                <For
                    each=move || {
                        transcript.get().messages().to_vec().into_iter().enumerate().collect::<Vec<_>>()
                    }
                    key=|(i, msg)| (*i, msg.text.len(), msg.state)
                    children=move |(_, msg)| view! { <MessageView message=msg /> }
                />
            </div>

            <div class="input-area">
                <textarea
                    node_ref=input_ref
                    rows="1"
                    placeholder="Ask anything…"
                    prop:value=move || draft.get()
                    on:input=move |ev| {
                        set_draft.set(event_target_value(&ev));
                        autosize(&input_ref);
                    }
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            send();
                        }
                    }
                />
                <button on:click=move |_| send() disabled=move || in_flight.get()>
                    {move || if in_flight.get() { "…" } else { "Send" }}
                </button>
            </div>

            <p class="hint">"Press Enter to send, Shift+Enter for new line"</p>
        </div>
    }
}

/// Drive one streamed answer into the transcript.
///
/// Returns at the first transport, status, or decode failure; the caller
/// owns the terminal transition either way.
async fn run_exchange(
    set_transcript: WriteSignal<Transcript>,
    bot: MessageId,
    question: &str,
) -> chat_core::Result<()> {
    let mut body = AskClient::default().ask(question).await?;
    set_transcript.update(|t| t.start_streaming(bot));

    let mut decoder = StreamDecoder::new();

    while let Some(chunk) = body.next().await {
        let fragment = decoder.decode(&chunk?)?;
        if !fragment.is_empty() {
            set_transcript.update(|t| t.push_fragment(bot, &fragment));
        }
    }
    decoder.finish()
}

/// Grow the textarea to exactly fit its content: collapse to the
/// intrinsic minimum, then take the resulting scroll height.
fn autosize(input_ref: &NodeRef<html::Textarea>) {
    if let Some(area) = input_ref.get_untracked() {
        let style = area.style();
        let _ = style.set_property("height", "auto");
        let _ = style.set_property("height", &format!("{}px", area.scroll_height()));
    }
}

/// Reset the textarea to its intrinsic single-row height
fn collapse(input_ref: &NodeRef<html::Textarea>) {
    if let Some(area) = input_ref.get_untracked() {
        let _ = area.style().set_property("height", "auto");
    }
}
