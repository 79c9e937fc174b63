//! # chat-core
//!
//! Platform-independent state for the ask-chat widget: the transcript
//! with its per-message lifecycle, the streaming UTF-8 decoder, and the
//! error taxonomy. Nothing here touches the DOM or the network, so the
//! whole exchange state machine runs under plain `cargo test`.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      Transcript                          │
//! │  ┌───────────────┐   ┌────────────────┐                  │
//! │  │    Message    │   │  StreamDecoder │  chunk bytes in, │
//! │  │ pending →     │◄──│  (UTF-8 across │  text fragments  │
//! │  │ streaming →   │   │   chunk splits)│  folded into the │
//! │  │ complete/fail │   └────────────────┘  open bot message│
//! │  └───────────────┘                                       │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The widget view (chat-web) owns a `Transcript` behind a reactive
//! signal and drives it with the handles `begin_exchange` returns.

pub mod decode;
pub mod error;
pub mod message;
pub mod transcript;

pub use decode::StreamDecoder;
pub use error::{APOLOGY, ChatError, Result};
pub use message::{Message, PLACEHOLDER_TEXT, RenderState, Sender};
pub use transcript::{Exchange, MessageId, Transcript};
