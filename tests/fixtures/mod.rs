use serde_json::{Value, json};

pub const SAMPLE_CITATIONS: [&str; 2] = [
    "https://en.wikipedia.org/wiki/Mount_Everest",
    "https://www.nationalgeographic.com/everest",
];

fn chunk(id: &str, choices: Value, citations: Option<&[&str]>) -> Value {
    let mut chunk = json!({
        "id": id,
        "model": "sonar",
        "object": "chat.completion.chunk",
        "created": 1234567890,
        "choices": choices,
    });
    if let Some(citations) = citations {
        chunk["citations"] = json!(citations);
    }
    chunk
}

pub fn delta_choice(content: &str) -> Value {
    json!({
        "index": 0,
        "finish_reason": null,
        "delta": {"role": "assistant", "content": content}
    })
}

pub fn message_choice(content: &str) -> Value {
    json!({
        "index": 0,
        "finish_reason": "stop",
        "delta": {"role": "assistant", "content": ""},
        "message": {"role": "assistant", "content": content}
    })
}

/// Answer split across deltas, citations repeated on every chunk the way
/// the API sends them.
pub fn sample_answer_chunks() -> Vec<Value> {
    vec![
        chunk("chatcmpl-test-1", json!([]), None),
        chunk(
            "chatcmpl-test-1",
            json!([delta_choice("Mount Everest")]),
            Some(&SAMPLE_CITATIONS),
        ),
        chunk(
            "chatcmpl-test-1",
            json!([delta_choice(" is the tallest")]),
            Some(&SAMPLE_CITATIONS),
        ),
        chunk(
            "chatcmpl-test-1",
            json!([delta_choice(" mountain.")]),
            Some(&["https://late.example/ignored"]),
        ),
    ]
}

pub fn sample_answer_text() -> &'static str {
    "Mount Everest is the tallest mountain."
}

pub fn sample_message_chunks() -> Vec<Value> {
    vec![chunk(
        "chatcmpl-test-2",
        json!([message_choice("Whole reply at once.")]),
        Some(&[]),
    )]
}
