use crate::consts;
use crate::errors::PerpError;
use crate::models::request::{Message, RequestPayload, Sampling};

pub fn build_request_payload(model: &str, query: &str, sampling: &Sampling) -> RequestPayload {
    RequestPayload {
        model: model.to_string(),
        messages: vec![Message::system(consts::SYSTEM_PROMPT), Message::user(query)],
        stream: true,
        sampling: sampling.clone(),
    }
}

pub fn serialize_payload(payload: &RequestPayload) -> Result<Vec<u8>, PerpError> {
    serde_json::to_vec(payload)
        .map_err(|e| PerpError::ConfigError(format!("cannot serialize request payload: {e}")))
}

pub fn validate_query(query: &str) -> Result<(), PerpError> {
    if query.trim().is_empty() {
        return Err(PerpError::ValidationError(
            "query must not be empty".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_sampling(sampling: &Sampling) -> Result<(), PerpError> {
    if let Some(max_tokens) = sampling.max_tokens {
        if max_tokens == 0 {
            return Err(PerpError::ValidationError(
                "max_tokens must be positive".to_string(),
            ));
        }
    }
    if let Some(temperature) = sampling.temperature {
        if !(0.0..=consts::MAX_TEMPERATURE).contains(&temperature) {
            return Err(PerpError::ValidationError(format!(
                "temperature {temperature} is outside [0, {}]",
                consts::MAX_TEMPERATURE
            )));
        }
    }
    if let Some(top_p) = sampling.top_p {
        if top_p.is_nan() || top_p <= 0.0 || top_p > 1.0 {
            return Err(PerpError::ValidationError(format!(
                "top_p {top_p} is outside (0, 1]"
            )));
        }
    }
    Ok(())
}
