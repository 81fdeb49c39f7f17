// ABOUTME: Line-buffering adapter turning a chunked HTTP body into a stream of text lines
// ABOUTME: Handles lines split across TCP chunks and several lines per chunk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::mem;

use bytes::Bytes;
use futures_util::{Stream, StreamExt};

use super::LineStream;
use crate::errors::AppError;

/// Accumulates bytes until complete lines are available
///
/// Network chunks and line boundaries do not line up, so a trailing partial
/// line is kept until the next `feed` or the final `flush`. Bytes are decoded
/// only once a whole line is present, so a character split across chunks
/// survives intact.
#[derive(Debug, Default)]
pub struct LineBuffer {
    buffer: Vec<u8>,
}

impl LineBuffer {
    /// Create an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk and return every complete non-blank line
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(bytes);

        let mut lines = Vec::new();
        while let Some(newline_pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let raw: Vec<u8> = self.buffer.drain(..=newline_pos).collect();
            if let Some(line) = decode_line(&raw[..newline_pos]) {
                lines.push(line);
            }
        }
        lines
    }

    /// Return the unterminated remainder once the body has ended
    pub fn flush(&mut self) -> Option<String> {
        let remaining = mem::take(&mut self.buffer);
        decode_line(&remaining)
    }
}

/// Decode one line without its terminator; `None` when blank
fn decode_line(raw: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(raw);
    let line = text.trim_end_matches('\r');
    (!line.trim().is_empty()).then(|| line.to_owned())
}

/// Wrap a raw byte stream into a lazy stream of lines
///
/// A read error is yielded once and ends the stream.
pub fn create_line_stream<S>(byte_stream: S, provider_name: &'static str) -> LineStream
where
    S: Stream<Item = Result<Bytes, reqwest::Error>> + Send + 'static,
{
    let stream = async_stream::stream! {
        let mut byte_stream = Box::pin(byte_stream);
        let mut buffer = LineBuffer::new();

        while let Some(chunk) = byte_stream.next().await {
            match chunk {
                Ok(bytes) => {
                    for line in buffer.feed(&bytes) {
                        yield Ok(line);
                    }
                }
                Err(e) => {
                    yield Err(AppError::external_service(
                        provider_name,
                        format!("Stream read error: {e}"),
                    ));
                    return;
                }
            }
        }

        if let Some(line) = buffer.flush() {
            yield Ok(line);
        }
    };

    Box::pin(stream)
}
