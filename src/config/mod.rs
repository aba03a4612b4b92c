use serde::{Deserialize, Serialize};

use crate::consts;
use crate::errors::PerpError;
use crate::llm_request::validate_sampling;
use crate::models::request::Sampling;

/// Contents of the optional JSON config file. Every field may be omitted.
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct FileConfig {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub api_key_env: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub show_citations: Option<bool>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub top_p: Option<f64>,
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    #[serde(default)]
    pub read_timeout_secs: Option<u64>,
}

/// Values given on the command line; they win over everything else.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub no_citations: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub show_citations: bool,
    pub sampling: Sampling,
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
}

pub trait ConfigLoader: Send + Sync {
    fn load_config(&self, overrides: &Overrides) -> Result<Config, PerpError>;
}

/// Resolves configuration from an environment lookup, the file it names,
/// and command-line overrides.
pub struct EnvConfigLoader<F> {
    lookup: F,
}

impl EnvConfigLoader<fn(&str) -> Option<String>> {
    pub fn from_process_env() -> Self {
        Self {
            lookup: |key| std::env::var(key).ok(),
        }
    }
}

impl<F> EnvConfigLoader<F>
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    pub fn new(lookup: F) -> Self {
        Self { lookup }
    }

    fn var(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|value| !value.trim().is_empty())
    }

    fn read_file_config(&self) -> Result<FileConfig, PerpError> {
        let Some(path) = self.var(consts::CONFIG_FILE_ENV) else {
            return Ok(FileConfig::default());
        };
        log::debug!("loading config file {path}");

        let config_str = std::fs::read_to_string(&path)
            .map_err(|e| PerpError::ConfigError(format!("cannot read {path}: {e}")))?;
        serde_json::from_str(&config_str)
            .map_err(|e| PerpError::ConfigError(format!("cannot parse {path}: {e}")))
    }
}

impl<F> ConfigLoader for EnvConfigLoader<F>
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn load_config(&self, overrides: &Overrides) -> Result<Config, PerpError> {
        let file = self.read_file_config()?;

        let api_url = self
            .var(consts::API_URL_ENV)
            .or(file.api_url)
            .unwrap_or_else(|| consts::DEFAULT_API_URL.to_string());
        let model = overrides
            .model
            .clone()
            .or_else(|| self.var(consts::MODEL_ENV))
            .or(file.model)
            .unwrap_or_else(|| consts::DEFAULT_MODEL.to_string());
        if model.trim().is_empty() {
            return Err(PerpError::ValidationError(
                "model name must not be empty".to_string(),
            ));
        }

        let sampling = Sampling {
            max_tokens: overrides
                .max_tokens
                .or(file.max_tokens)
                .or(Some(consts::DEFAULT_MAX_TOKENS)),
            temperature: overrides
                .temperature
                .or(file.temperature)
                .or(Some(consts::DEFAULT_TEMPERATURE)),
            top_p: overrides
                .top_p
                .or(file.top_p)
                .or(Some(consts::DEFAULT_TOP_P)),
        };
        validate_sampling(&sampling)?;

        let api_key_env = file
            .api_key_env
            .unwrap_or_else(|| consts::API_KEY_ENV.to_string());
        let api_key = self.var(&api_key_env).ok_or_else(|| {
            PerpError::ConfigError(format!(
                "please set your {api_key_env} environment variable"
            ))
        })?;

        Ok(Config {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            show_citations: !overrides.no_citations && file.show_citations.unwrap_or(true),
            sampling,
            connect_timeout_secs: file
                .connect_timeout_secs
                .unwrap_or(consts::CONNECT_TIMEOUT_SECS),
            read_timeout_secs: file
                .read_timeout_secs
                .unwrap_or(consts::READ_TIMEOUT_SECS),
        })
    }
}

pub fn load_config(overrides: &Overrides) -> Result<Config, PerpError> {
    let loader = EnvConfigLoader::from_process_env();
    loader.load_config(overrides)
}
