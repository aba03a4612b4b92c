use crate::models::response_stream::{StreamingChoice, StreamingResponse};

pub fn delta_chunk(parts: &[&str]) -> StreamingResponse {
    StreamingResponse {
        choices: parts.iter().map(|p| StreamingChoice::from_delta(p)).collect(),
        citations: None,
    }
}

pub fn message_chunk(content: &str) -> StreamingResponse {
    StreamingResponse {
        choices: vec![StreamingChoice::from_message(content)],
        citations: None,
    }
}

pub fn empty_chunk() -> StreamingResponse {
    StreamingResponse::default()
}

pub fn with_citations(mut chunk: StreamingResponse, citations: &[&str]) -> StreamingResponse {
    chunk.citations = Some(citations.iter().map(|c| c.to_string()).collect());
    chunk
}

pub fn data_line(chunk: &StreamingResponse) -> String {
    format!("data: {}", serde_json::to_string(chunk).unwrap())
}

/// Frames chunks the way the API does, blank line after each event.
pub fn sse_body(chunks: &[StreamingResponse], done: bool) -> String {
    let mut body = String::new();
    for chunk in chunks {
        body.push_str(&data_line(chunk));
        body.push_str("\n\n");
    }
    if done {
        body.push_str("data: [DONE]\n\n");
    }
    body
}

/// Splits a body into fixed-size byte pieces, ignoring char boundaries.
pub fn split_bytes(body: &str, size: usize) -> Vec<Result<Vec<u8>, std::io::Error>> {
    body.as_bytes()
        .chunks(size)
        .map(|piece| Ok(piece.to_vec()))
        .collect()
}
