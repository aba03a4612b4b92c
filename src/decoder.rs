//! Line-level decoder for the chat-completion event stream.
//!
//! Each line of the response body is fed through [`transition`], a pure
//! function of the current state, the line, and whether the citation latch
//! is still open. [`StreamDecoder`] holds the state and the latch for one
//! session and logs the diagnostics the transition reports.

use crate::consts;
use crate::errors::PerpError;
use crate::models::response_stream::{StreamingResponse, select_content};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderState {
    Streaming,
    /// The previous `data:` line could not be decoded. Not sticky: the next
    /// line is handled exactly as in `Streaming`.
    Recovering,
    Done,
}

/// Result of feeding one line to the decoder.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: DecoderState,
    pub emitted: String,
    /// Set only when this line closes the citation latch.
    pub citations: Option<Vec<String>>,
    pub diagnostic: Option<String>,
}

impl Transition {
    fn to(state: DecoderState) -> Self {
        Self {
            state,
            emitted: String::new(),
            citations: None,
            diagnostic: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEnd {
    Sentinel,
    EndOfInput,
    ReadError(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedStream {
    pub citations: Vec<String>,
    pub end: StreamEnd,
}

impl DecodedStream {
    /// A stream cut short by a read error fails the invocation; the text
    /// already written stays written.
    pub fn into_result(self) -> Result<Self, PerpError> {
        match &self.end {
            StreamEnd::ReadError(msg) => Err(PerpError::NetworkError(format!(
                "error reading stream: {msg}"
            ))),
            StreamEnd::Sentinel | StreamEnd::EndOfInput => Ok(self),
        }
    }
}

fn emit_choices(chunk: &StreamingResponse) -> String {
    chunk.choices.iter().map(select_content).collect()
}

pub fn transition(state: DecoderState, line: &str, latch_open: bool) -> Transition {
    if state == DecoderState::Done {
        return Transition::to(DecoderState::Done);
    }

    let line = line.trim();
    if line.is_empty() {
        return Transition::to(DecoderState::Streaming);
    }

    let Some(data) = line.strip_prefix(consts::DATA_PREFIX) else {
        // Unframed JSON is accepted as a fallback; anything else is noise.
        return match serde_json::from_str::<StreamingResponse>(line) {
            Ok(chunk) => Transition {
                emitted: emit_choices(&chunk),
                ..Transition::to(DecoderState::Streaming)
            },
            Err(_) => Transition::to(DecoderState::Streaming),
        };
    };

    let data = data.trim();
    if data == consts::DONE_SENTINEL {
        return Transition::to(DecoderState::Done);
    }

    // `null` decodes to an empty chunk: nothing emitted, latch untouched.
    match serde_json::from_str::<Option<StreamingResponse>>(data) {
        Ok(chunk) => {
            let chunk = chunk.unwrap_or_default();
            let citations = if latch_open && !chunk.choices.is_empty() {
                Some(chunk.citations.clone().unwrap_or_default())
            } else {
                None
            };
            Transition {
                emitted: emit_choices(&chunk),
                citations,
                ..Transition::to(DecoderState::Streaming)
            }
        }
        Err(e) => Transition {
            diagnostic: Some(format!("error parsing chunk {data:?}: {e}")),
            ..Transition::to(DecoderState::Recovering)
        },
    }
}

#[derive(Debug, Clone)]
pub struct StreamDecoder {
    state: DecoderState,
    citations: Option<Vec<String>>,
}

impl Default for StreamDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamDecoder {
    pub fn new() -> Self {
        Self {
            state: DecoderState::Streaming,
            citations: None,
        }
    }

    pub fn state(&self) -> DecoderState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == DecoderState::Done
    }

    /// Feeds one line and returns the text it produced, if any.
    pub fn feed_line(&mut self, line: &str) -> Option<String> {
        let step = transition(self.state, line, self.citations.is_none());

        if let Some(diagnostic) = step.diagnostic {
            log::warn!("{diagnostic}");
        }
        if let Some(citations) = step.citations {
            log::debug!("captured {} citations", citations.len());
            self.citations = Some(citations);
        }
        self.state = step.state;

        if step.emitted.is_empty() {
            None
        } else {
            Some(step.emitted)
        }
    }

    /// Citations captured so far; empty until the latch closes.
    pub fn citations(&self) -> &[String] {
        self.citations.as_deref().unwrap_or_default()
    }

    pub fn finish(mut self, end: StreamEnd) -> DecodedStream {
        self.state = DecoderState::Done;
        DecodedStream {
            citations: self.citations.take().unwrap_or_default(),
            end,
        }
    }
}
