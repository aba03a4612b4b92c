use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

use reqwest::header::{CONTENT_TYPE, HeaderValue};

pub async fn setup_streaming_mock(sse: String) -> MockServer {
    setup_streaming_mock_with_status(200, sse).await
}

pub async fn setup_streaming_mock_with_status(status: u16, sse: String) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_bytes(sse.into_bytes())
                .insert_header(CONTENT_TYPE, HeaderValue::from_static("text/event-stream")),
        )
        .mount(&mock_server)
        .await;

    mock_server
}

pub async fn setup_error_mock(
    status_code: u16,
    error_message: &str,
    error_type: &str,
) -> MockServer {
    let mock_server = MockServer::start().await;

    let error_body = json!({
        "error": {
            "message": error_message,
            "type": error_type
        }
    });

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(status_code).set_body_json(error_body))
        .mount(&mock_server)
        .await;

    mock_server
}
