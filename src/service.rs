use std::io::Write;

use crate::citations::render_citations;
use crate::decoder::DecodedStream;
use crate::errors::PerpError;
use crate::llm_client::ChatClient;
use crate::models::request::RequestPayload;
use crate::session::stream_session;

pub struct ChatService<C> {
    client: C,
}

impl<C: ChatClient> ChatService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Sends one query and streams the answer into `out`, followed by the
    /// citations block when `show_citations` is set.
    pub async fn ask<W: Write>(
        &self,
        payload: &RequestPayload,
        out: &mut W,
        show_citations: bool,
    ) -> Result<DecodedStream, PerpError> {
        let response = self.client.request_chat_completion(payload).await?;
        let decoded = stream_session(response.bytes_stream(), out).await?;

        if show_citations {
            let block = render_citations(&decoded.citations);
            if !block.is_empty() {
                out.write_all(block.as_bytes())?;
                out.flush()?;
            }
        }

        Ok(decoded)
    }

    /// One full invocation: `ask`, terminate the output with a newline, and
    /// fail if the stream was cut short by a read error.
    pub async fn run<W: Write>(
        &self,
        payload: &RequestPayload,
        out: &mut W,
        show_citations: bool,
    ) -> Result<(), PerpError> {
        let decoded = self.ask(payload, out, show_citations).await?;

        // The citations block already ends with a newline.
        if !show_citations || decoded.citations.is_empty() {
            writeln!(out)?;
            out.flush()?;
        }

        decoded.into_result().map(|_| ())
    }
}
