//! Configuration management

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::core::errors::{Result, TranslationError};

/// Google Translate v2 base endpoint
pub const DEFAULT_API_ENDPOINT: &str = "https://www.googleapis.com/language/translate/v2";

/// Language every phrase is translated into
pub const DEFAULT_TARGET_LANGUAGE: &str = "en";

/// Name the bot answers to in the chat REPL
pub const DEFAULT_BOT_NAME: &str = "hermes";

/// Prefix for environment overrides, e.g. `HERMES_API_KEY`
const ENV_PREFIX: &str = "HERMES";

/// Configuration for the translation assistant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Provider API key, the only required setting
    pub api_key: String,
    /// Provider base URL
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,
    /// Language phrases are translated into
    #[serde(default = "default_target_language")]
    pub target_language: String,
    /// Outbound request timeout. `None` waits forever.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    /// Name the bot answers to in the chat REPL
    #[serde(default = "default_bot_name")]
    pub bot_name: String,
}

fn default_api_endpoint() -> String {
    DEFAULT_API_ENDPOINT.to_string()
}

fn default_target_language() -> String {
    DEFAULT_TARGET_LANGUAGE.to_string()
}

fn default_bot_name() -> String {
    DEFAULT_BOT_NAME.to_string()
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_endpoint: default_api_endpoint(),
            target_language: default_target_language(),
            timeout_ms: None,
            bot_name: default_bot_name(),
        }
    }
}

impl TranslatorConfig {
    /// Build a configuration around a provider key, everything else defaulted
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Point the client at a different provider base URL
    pub fn with_endpoint(mut self, api_endpoint: impl Into<String>) -> Self {
        self.api_endpoint = api_endpoint.into();
        self
    }

    /// Load configuration: defaults, then the optional file, then `HERMES_*` variables.
    ///
    /// The result is not validated; callers may still supply the key.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("api_key", "")?
            .set_default("api_endpoint", DEFAULT_API_ENDPOINT)?
            .set_default("target_language", DEFAULT_TARGET_LANGUAGE)?
            .set_default("bot_name", DEFAULT_BOT_NAME)?;

        if let Some(path) = path {
            info!("Loading configuration from {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        let config: Self = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load, let a command-line key override file and environment, then validate
    pub fn load_with_key(path: Option<&Path>, api_key: Option<String>) -> Result<Self> {
        let mut config = Self::load(path)?;
        if let Some(api_key) = api_key {
            config.api_key = api_key;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(TranslationError::ConfigError {
                message: "API key is required".to_string(),
            });
        }

        if self.api_endpoint.is_empty() {
            return Err(TranslationError::ConfigError {
                message: "API endpoint is required".to_string(),
            });
        }

        if self.target_language.is_empty() {
            return Err(TranslationError::ConfigError {
                message: "target language is required".to_string(),
            });
        }

        Ok(())
    }
}
