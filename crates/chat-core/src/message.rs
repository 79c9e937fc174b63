//! Transcript Messages
//!
//! Message model shared by the widget view and its tests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Literal waiting indicator a bot message displays before any content
/// has streamed.
pub const PLACEHOLDER_TEXT: &str = "Thinking…";

/// Who produced a message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Typed by the user
    User,
    /// Streamed from the answer endpoint
    Bot,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

/// Lifecycle of a message's displayed content
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderState {
    /// Bot placeholder, nothing streamed yet
    Pending,
    /// Bot text growing as chunks arrive
    Streaming,
    /// Content is final
    Complete,
    /// Exchange failed; the apology text is shown
    Failed,
}

impl RenderState {
    /// Terminal states accept no further mutation
    pub fn is_terminal(self) -> bool {
        matches!(self, RenderState::Complete | RenderState::Failed)
    }

    /// True while the message should carry a loading affordance
    pub fn is_loading(self) -> bool {
        matches!(self, RenderState::Pending | RenderState::Streaming)
    }
}

/// A single transcript entry
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    /// Message sender
    pub sender: Sender,

    /// Text content; grows incrementally while a bot message streams
    pub text: String,

    /// Rendering lifecycle state
    pub state: RenderState,

    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// User message, complete on creation
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            state: RenderState::Complete,
            timestamp: Utc::now(),
        }
    }

    /// Bot placeholder shown until the first fragment arrives
    pub fn placeholder() -> Self {
        Self {
            sender: Sender::Bot,
            text: PLACEHOLDER_TEXT.into(),
            state: RenderState::Pending,
            timestamp: Utc::now(),
        }
    }
}
