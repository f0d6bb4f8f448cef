//! HTTP client for the translation provider

use reqwest::Url;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{LanguagesData, ProviderResponse, TranslationsData};

/// Thin client for the provider's two GET endpoints
#[derive(Debug, Clone)]
pub struct ProviderClient {
    client: reqwest::Client,
    config: Arc<TranslatorConfig>,
}

impl ProviderClient {
    /// Create a new provider client
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder()
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .pool_max_idle_per_host(10);
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }

        Ok(Self {
            client: builder.build()?,
            config: Arc::new(config),
        })
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// `<base>?<params>&key=<key>`
    pub fn endpoint(&self, params: &[(&str, &str)]) -> Result<Url> {
        self.with_query(self.config.api_endpoint.clone(), params)
    }

    /// `<base>/<path>?<params>&key=<key>`
    pub fn endpoint_with_path(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let base = format!(
            "{}/{}",
            self.config.api_endpoint.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        self.with_query(base, params)
    }

    /// Append params in order, then the API key
    fn with_query(&self, base: String, params: &[(&str, &str)]) -> Result<Url> {
        let pairs = params
            .iter()
            .copied()
            .chain(std::iter::once(("key", self.config.api_key.as_str())));

        Url::parse_with_params(&base, pairs).map_err(|e| TranslationError::ConfigError {
            message: format!("invalid API endpoint {}: {}", base, e),
        })
    }

    /// GET `<base>/languages?target=<target>`
    pub async fn supported_languages(&self) -> Result<ProviderResponse<LanguagesData>> {
        let url = self.endpoint_with_path(
            "languages",
            &[("target", self.config.target_language.as_str())],
        )?;
        self.get_json(url).await
    }

    /// GET `<base>?target=<target>&q=<text>`
    pub async fn translate(&self, text: &str) -> Result<ProviderResponse<TranslationsData>> {
        let url = self.endpoint(&[
            ("target", self.config.target_language.as_str()),
            ("q", text),
        ])?;
        self.get_json(url).await
    }

    /// Send the request and parse the body as JSON, whatever the status code
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<ProviderResponse<T>> {
        debug!("GET {}{}", url.origin().ascii_serialization(), url.path());

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        debug!("Provider answered {} ({} bytes)", status, body.len());

        serde_json::from_str(&body).map_err(|e| TranslationError::InvalidResponseError {
            message: format!("status {}: {}", status, e),
        })
    }
}
