use serde::{self, Deserialize, Deserializer, Serialize};

/// `delta` or `message` body of a streamed choice. The API may omit either
/// field or send `null`, so both are optional.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct ChunkMessage {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub content: Option<String>,
}

impl ChunkMessage {
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct StreamingChoice {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub delta: Option<ChunkMessage>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<ChunkMessage>,
}

impl StreamingChoice {
    pub fn from_delta(content: &str) -> Self {
        Self {
            delta: Some(ChunkMessage {
                role: None,
                content: Some(content.to_string()),
            }),
            message: None,
        }
    }

    pub fn from_message(content: &str) -> Self {
        Self {
            delta: None,
            message: Some(ChunkMessage {
                role: Some("assistant".to_string()),
                content: Some(content.to_string()),
            }),
        }
    }
}

/// One decoded chunk of the event stream.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct StreamingResponse {
    #[serde(deserialize_with = "null_as_empty", default)]
    pub choices: Vec<StreamingChoice>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub citations: Option<Vec<String>>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Picks the printable text of a choice: the incremental `delta` when it
/// carries anything, otherwise the whole `message`.
pub fn select_content(choice: &StreamingChoice) -> &str {
    let delta = choice.delta.as_ref().map(ChunkMessage::text).unwrap_or_default();
    if !delta.is_empty() {
        return delta;
    }
    choice
        .message
        .as_ref()
        .map(ChunkMessage::text)
        .unwrap_or_default()
}
