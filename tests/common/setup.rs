use perp::llm_client::LLMClient;
use perp::llm_request::build_request_payload;
use perp::models::request::{RequestPayload, Sampling};
use perp::service::ChatService;

pub fn create_service(base_url: &str) -> ChatService<LLMClient> {
    ChatService::new(LLMClient::new(reqwest::Client::new(), base_url, "test-key"))
}

pub fn sample_payload() -> RequestPayload {
    build_request_payload(
        "sonar",
        "What is the tallest mountain?",
        &Sampling {
            max_tokens: Some(123),
            temperature: Some(0.2),
            top_p: Some(0.9),
        },
    )
}

pub fn output_text(out: &[u8]) -> String {
    String::from_utf8(out.to_vec()).expect("Output should be UTF-8")
}
