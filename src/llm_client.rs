use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};

use crate::config::Config;
use crate::consts;
use crate::errors::PerpError;
use crate::llm_request::serialize_payload;
use crate::models::request::RequestPayload;

const EVENT_STREAM: &str = "text/event-stream";
const APPLICATION_JSON: &str = "application/json";

#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Sends the payload and returns the successful, still-unread response.
    async fn request_chat_completion(
        &self,
        payload: &RequestPayload,
    ) -> Result<Response, PerpError>;
}

pub struct LLMClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl LLMClient {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, PerpError> {
        let http_client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .read_timeout(Duration::from_secs(config.read_timeout_secs))
            .build()?;
        Ok(Self::new(http_client, &config.api_url, &config.api_key))
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, consts::CHAT_COMPLETIONS_PATH)
    }
}

#[async_trait]
impl ChatClient for LLMClient {
    async fn request_chat_completion(
        &self,
        payload: &RequestPayload,
    ) -> Result<Response, PerpError> {
        let body = serialize_payload(payload)?;
        log::debug!("POST {} model={}", self.endpoint(), payload.model);

        let response = self
            .client
            .post(self.endpoint())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(ACCEPT, EVENT_STREAM)
            .body(body)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(PerpError::ApiError(format!(
                "received status {}\n{}",
                status.as_u16(),
                text
            )));
        }

        match response.headers().get(CONTENT_TYPE).map(|v| v.to_str()) {
            Some(Ok(content_type)) if content_type.starts_with(EVENT_STREAM) => {}
            Some(Ok(content_type)) => {
                log::warn!("content-type: {content_type}, expected: {EVENT_STREAM}")
            }
            _ => log::warn!("response has no usable content-type, expected: {EVENT_STREAM}"),
        }

        Ok(response)
    }
}
