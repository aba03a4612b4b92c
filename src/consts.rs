pub const DEFAULT_API_URL: &str = "https://api.perplexity.ai";
pub const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";
pub const DEFAULT_MODEL: &str = "sonar";

pub const API_KEY_ENV: &str = "PERPLEXITY_API_KEY";
pub const CONFIG_FILE_ENV: &str = "PERP_CONFIG_FILE";
pub const API_URL_ENV: &str = "PERP_API_URL";
pub const MODEL_ENV: &str = "PERP_MODEL";

pub const SYSTEM_PROMPT: &str = "Be precise and concise.";

pub const DEFAULT_MAX_TOKENS: u32 = 123;
pub const DEFAULT_TEMPERATURE: f64 = 0.2;
pub const DEFAULT_TOP_P: f64 = 0.9;

pub const MAX_TEMPERATURE: f64 = 2.0;

pub const DATA_PREFIX: &str = "data:";
pub const DONE_SENTINEL: &str = "[DONE]";

pub const CONNECT_TIMEOUT_SECS: u64 = 30;
pub const READ_TIMEOUT_SECS: u64 = 60;

pub const DEFAULT_LOG_FILTER: &str = "warn";
