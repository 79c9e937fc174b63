//! Answer Endpoint Client
//!
//! One POST per question; the answer body is consumed as a chunked byte
//! stream and decoded upstream by the caller.

use std::pin::Pin;

use futures::{Stream, StreamExt};
use serde::Serialize;

use chat_core::{ChatError, Result};

/// Streamed answer body: raw byte chunks, decode errors deferred to the
/// caller's `StreamDecoder`
pub type AnswerStream = Pin<Box<dyn Stream<Item = Result<Vec<u8>>>>>;

/// JSON payload for one question
#[derive(Debug, Serialize)]
pub struct AskRequest<'a> {
    pub question: &'a str,
}

/// Client for the answer endpoint
#[derive(Clone, Debug)]
pub struct AskClient {
    endpoint: String,
}

impl Default for AskClient {
    fn default() -> Self {
        Self { endpoint: "/ask".into() }
    }
}

impl AskClient {
    /// Client for a non-default endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    /// POST a question and open the streamed answer body.
    ///
    /// A non-success status is an error; its body is never read.
    pub async fn ask(&self, question: &str) -> Result<AnswerStream> {
        let client = reqwest::Client::new();

        let response = client
            .post(&self.endpoint)
            .json(&AskRequest { question })
            .send()
            .await
            .map_err(|e| ChatError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ChatError::Status(response.status().as_u16()));
        }

        let stream = response.bytes_stream().map(|chunk| {
            chunk
                .map(|bytes| bytes.to_vec())
                .map_err(|e| ChatError::Stream(e.to_string()))
        });

        Ok(Box::pin(stream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_request_payload_is_a_single_question_field() {
        let payload = serde_json::to_value(AskRequest { question: "What is the law?" })
            .unwrap();
        assert_eq!(payload, serde_json::json!({ "question": "What is the law?" }));
    }

    #[test]
    fn the_default_endpoint_is_ask() {
        assert_eq!(AskClient::default().endpoint, "/ask");
    }
}
