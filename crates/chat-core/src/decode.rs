//! Streaming UTF-8 Decode
//!
//! The answer endpoint streams UTF-8 text with arbitrary chunk
//! boundaries, so a multi-byte sequence can be split across two reads.
//! `StreamDecoder` holds the incomplete tail back until its continuation
//! bytes arrive in the next chunk.

use crate::error::{ChatError, Result};

/// Incremental UTF-8 decoder for a chunked byte stream
#[derive(Debug, Default)]
pub struct StreamDecoder {
    /// Incomplete trailing sequence carried over from the previous chunk.
    /// Never longer than three bytes (the longest incomplete prefix of a
    /// four-byte sequence).
    pending: Vec<u8>,

    /// Bytes decoded so far, for error reporting
    offset: usize,
}

impl StreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the next chunk, returning the completed text.
    ///
    /// An incomplete sequence at the end of the chunk is held until the
    /// next call; a malformed sequence anywhere is an error.
    pub fn decode(&mut self, chunk: &[u8]) -> Result<String> {
        let mut buf = std::mem::take(&mut self.pending);
        buf.extend_from_slice(chunk);

        let text = match String::from_utf8(buf) {
            Ok(text) => text,
            Err(err) => {
                let utf8 = err.utf8_error();
                let valid = utf8.valid_up_to();
                if utf8.error_len().is_some() {
                    // Malformed, not just cut short
                    return Err(ChatError::Decode { offset: self.offset + valid });
                }
                let mut bytes = err.into_bytes();
                self.pending = bytes.split_off(valid);
                String::from_utf8(bytes)
                    .map_err(|e| ChatError::Decode {
                        offset: self.offset + e.utf8_error().valid_up_to(),
                    })?
            }
        };
        self.offset += text.len();
        Ok(text)
    }

    /// End of stream. A leftover partial sequence means the stream was
    /// truncated mid-character.
    pub fn finish(self) -> Result<()> {
        if self.pending.is_empty() {
            Ok(())
        } else {
            Err(ChatError::Decode { offset: self.offset })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through_unchanged() {
        let mut decoder = StreamDecoder::new();
        assert_eq!(decoder.decode(b"Hi").unwrap(), "Hi");
        assert_eq!(decoder.decode(b" there").unwrap(), " there");
        decoder.finish().unwrap();
    }

    #[test]
    fn empty_chunks_yield_empty_fragments() {
        let mut decoder = StreamDecoder::new();
        assert_eq!(decoder.decode(b"").unwrap(), "");
        decoder.finish().unwrap();
    }

    #[test]
    fn two_byte_sequence_split_across_chunks() {
        // "é" is C3 A9; the C3 arrives alone first
        let mut decoder = StreamDecoder::new();
        assert_eq!(decoder.decode(b"caf\xC3").unwrap(), "caf");
        assert_eq!(decoder.decode(b"\xA9!").unwrap(), "\u{e9}!");
        decoder.finish().unwrap();
    }

    #[test]
    fn four_byte_sequence_split_in_the_middle() {
        // U+1F980 is F0 9F A6 80
        let mut decoder = StreamDecoder::new();
        assert_eq!(decoder.decode(b"\xF0\x9F").unwrap(), "");
        assert_eq!(decoder.decode(b"\xA6\x80 crab").unwrap(), "\u{1f980} crab");
        decoder.finish().unwrap();
    }

    #[test]
    fn malformed_bytes_are_an_error_with_their_offset() {
        let mut decoder = StreamDecoder::new();
        let err = decoder.decode(b"ok\xFFrest").unwrap_err();
        match err {
            ChatError::Decode { offset } => assert_eq!(offset, 2),
            other => panic!("expected decode error, got {other}"),
        }
    }

    #[test]
    fn offset_accounts_for_earlier_chunks() {
        let mut decoder = StreamDecoder::new();
        decoder.decode(b"abcd").unwrap();
        let err = decoder.decode(b"\xC0").unwrap_err();
        match err {
            ChatError::Decode { offset } => assert_eq!(offset, 4),
            other => panic!("expected decode error, got {other}"),
        }
    }

    #[test]
    fn truncated_stream_fails_at_finish() {
        let mut decoder = StreamDecoder::new();
        assert_eq!(decoder.decode(b"ok\xE2\x82").unwrap(), "ok");
        assert!(decoder.finish().is_err());
    }
}
