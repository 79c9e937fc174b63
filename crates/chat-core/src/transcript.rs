//! Transcript State
//!
//! Append-only message list plus the per-exchange state machine the widget
//! drives: `begin_exchange` opens a question/answer round, `push_fragment`
//! folds decoded text into the open bot message, and `complete`/`fail`
//! close it.

use serde::{Deserialize, Serialize};

use crate::error::APOLOGY;
use crate::message::{Message, RenderState, Sender};

/// Stable handle to a transcript entry.
///
/// The transcript is append-only, so an index handed out once stays valid
/// for the life of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(usize);

/// Handles for one question/answer round
#[derive(Clone, Copy, Debug)]
pub struct Exchange {
    /// The user's question
    pub user: MessageId,
    /// The bot answer, initially a placeholder
    pub bot: MessageId,
}

/// Ordered, append-only list of displayed messages
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and hand back its id
    pub fn push(&mut self, message: Message) -> MessageId {
        self.messages.push(message);
        MessageId(self.messages.len() - 1)
    }

    /// Start a question/answer round.
    ///
    /// The draft is trimmed first; an empty draft is silently ignored, as
    /// is a submit while a previous exchange is still open. On success the
    /// user message and the bot placeholder are appended together.
    pub fn begin_exchange(&mut self, draft: &str) -> Option<Exchange> {
        let question = draft.trim();
        if question.is_empty() || self.has_open_exchange() {
            return None;
        }
        let user = self.push(Message::user(question));
        let bot = self.push(Message::placeholder());
        Some(Exchange { user, bot })
    }

    /// True while a bot message is still pending or streaming.
    ///
    /// Invariant: at most one such message exists at a time, because
    /// `begin_exchange` refuses to open a second round.
    pub fn has_open_exchange(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.sender == Sender::Bot && m.state.is_loading())
    }

    /// Response accepted: clear the placeholder text and mark the bot
    /// message as actively streaming. No-op unless the message is still
    /// pending.
    pub fn start_streaming(&mut self, id: MessageId) {
        if let Some(message) = self.messages.get_mut(id.0) {
            if message.state == RenderState::Pending {
                message.text.clear();
                message.state = RenderState::Streaming;
            }
        }
    }

    /// Append a decoded fragment to a bot message.
    ///
    /// A fragment arriving while the message is still pending clears the
    /// placeholder text first. Fragments for a terminal message are
    /// dropped.
    pub fn push_fragment(&mut self, id: MessageId, fragment: &str) {
        let Some(message) = self.messages.get_mut(id.0) else {
            return;
        };
        match message.state {
            RenderState::Pending => {
                message.text.clear();
                message.state = RenderState::Streaming;
            }
            RenderState::Streaming => {}
            RenderState::Complete | RenderState::Failed => return,
        }
        message.text.push_str(fragment);
    }

    /// Mark a bot message's stream as finished, keeping whatever text
    /// accumulated. No-op on terminal messages.
    pub fn complete(&mut self, id: MessageId) {
        if let Some(message) = self.messages.get_mut(id.0) {
            if !message.state.is_terminal() {
                message.state = RenderState::Complete;
            }
        }
    }

    /// Terminal failure: the apology text replaces whatever had streamed.
    /// No-op on terminal messages.
    pub fn fail(&mut self, id: MessageId) {
        if let Some(message) = self.messages.get_mut(id.0) {
            if !message.state.is_terminal() {
                message.text = APOLOGY.into();
                message.state = RenderState::Failed;
            }
        }
    }

    /// Look up a message by handle
    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.get(id.0)
    }

    /// All messages in display order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
