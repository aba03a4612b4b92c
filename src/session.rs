use std::fmt::Display;
use std::io::Write;

use futures_core::Stream;
use tokio_stream::StreamExt;

use crate::decoder::{DecodedStream, StreamDecoder, StreamEnd};
use crate::errors::PerpError;

/// Reassembles newline-terminated lines from arbitrarily split byte chunks.
#[derive(Debug, Default)]
pub struct LineBuffer {
    pending: Vec<u8>,
    // Prefix of `pending` already known to hold no newline.
    scanned: usize,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, chunk: &[u8]) {
        self.pending.extend_from_slice(chunk);
    }

    /// Next complete line without its `\n`. Bytes after the last newline stay
    /// buffered until more input arrives.
    pub fn next_line(&mut self) -> Option<String> {
        let Some(offset) = self.pending[self.scanned..].iter().position(|b| *b == b'\n') else {
            self.scanned = self.pending.len();
            return None;
        };
        let end = self.scanned + offset;
        let line: Vec<u8> = self.pending.drain(..=end).collect();
        self.scanned = 0;
        Some(String::from_utf8_lossy(&line[..end]).into_owned())
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

/// Decodes a response body, writing text to `out` as soon as it is decoded.
///
/// Reading stops at the `[DONE]` sentinel, at end of input, or at the first
/// read error. A final fragment without a trailing newline is dropped. The
/// body is consumed and released on every path.
pub async fn stream_session<S, B, E, W>(body: S, out: &mut W) -> Result<DecodedStream, PerpError>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: Display,
    W: Write,
{
    let mut body = std::pin::pin!(body);
    let mut decoder = StreamDecoder::new();
    let mut lines = LineBuffer::new();

    loop {
        while let Some(line) = lines.next_line() {
            if let Some(text) = decoder.feed_line(&line) {
                out.write_all(text.as_bytes())?;
                out.flush()?;
            }
            if decoder.is_done() {
                return Ok(decoder.finish(StreamEnd::Sentinel));
            }
        }

        match body.next().await {
            Some(Ok(chunk)) => lines.push(chunk.as_ref()),
            Some(Err(e)) => {
                log::error!("error reading stream: {e}");
                return Ok(decoder.finish(StreamEnd::ReadError(e.to_string())));
            }
            None => {
                if lines.has_pending() {
                    log::debug!("discarding unterminated final line");
                }
                return Ok(decoder.finish(StreamEnd::EndOfInput));
            }
        }
    }
}
