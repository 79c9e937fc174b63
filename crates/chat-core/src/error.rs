//! Error Types

use thiserror::Error;

/// Result type alias for chat operations
pub type Result<T> = std::result::Result<T, ChatError>;

/// Fixed text shown in the transcript when an exchange fails.
pub const APOLOGY: &str =
    "Sorry, something went wrong while answering. Please try again.";

/// Errors raised while fetching a streamed answer
#[derive(Error, Debug)]
pub enum ChatError {
    /// Request could not be built or sent
    #[error("request failed: {0}")]
    Request(String),

    /// Server answered with a non-success status
    #[error("server returned status {0}")]
    Status(u16),

    /// Response body stream failed mid-read
    #[error("response stream error: {0}")]
    Stream(String),

    /// Response bytes were not valid UTF-8
    #[error("invalid UTF-8 at byte {offset} of response stream")]
    Decode { offset: usize },
}

impl ChatError {
    /// Convert to the user-facing message shown in the transcript.
    ///
    /// Every failure converges on the same apology; the variant detail is
    /// for logs only.
    pub fn user_message(&self) -> &'static str {
        APOLOGY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_maps_to_the_apology() {
        let errors = [
            ChatError::Request("connection refused".into()),
            ChatError::Status(503),
            ChatError::Stream("body closed".into()),
            ChatError::Decode { offset: 7 },
        ];
        for err in errors {
            assert_eq!(err.user_message(), APOLOGY);
        }
    }

    #[test]
    fn display_carries_the_detail() {
        let err = ChatError::Status(404);
        assert_eq!(err.to_string(), "server returned status 404");
    }
}
