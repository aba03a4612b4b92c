use std::fmt;

#[derive(Debug, Clone)]
pub enum PerpError {
    ValidationError(String),
    ConfigError(String),
    ApiError(String),
    NetworkError(String),
    IoError(String),
}

impl fmt::Display for PerpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerpError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            PerpError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            PerpError::ApiError(msg) => write!(f, "API error: {}", msg),
            PerpError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            PerpError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for PerpError {}

impl From<reqwest::Error> for PerpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            PerpError::NetworkError(err.to_string())
        } else if err.is_builder() {
            PerpError::ConfigError(err.to_string())
        } else {
            PerpError::ApiError(err.to_string())
        }
    }
}

impl From<std::io::Error> for PerpError {
    fn from(err: std::io::Error) -> Self {
        PerpError::IoError(err.to_string())
    }
}
