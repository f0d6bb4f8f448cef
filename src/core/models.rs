//! Core data models for provider traffic and translation results

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::core::errors::{Result, TranslationError};

/// Body of a provider reply: either an error envelope or a data envelope.
///
/// A truthy top-level `error` field wins even when `data` is present too;
/// `null`, `false`, `0` and `""` count as no error.
#[derive(Debug, Clone)]
pub enum ProviderResponse<T> {
    /// Error envelope
    Failure {
        /// Raw `error` value
        error: Value,
    },
    /// Data envelope
    Success {
        /// Endpoint payload
        data: T,
    },
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ProviderResponse<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Envelope<U> {
            error: Option<Value>,
            data: Option<U>,
        }

        let envelope = Envelope::<T>::deserialize(deserializer)?;
        match (envelope.error, envelope.data) {
            (Some(error), _) if is_truthy(&error) => Ok(ProviderResponse::Failure { error }),
            (_, Some(data)) => Ok(ProviderResponse::Success { data }),
            _ => Err(serde::de::Error::missing_field("data")),
        }
    }
}

/// JSON truthiness as the provider's clients judge an `error` field
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl<T> ProviderResponse<T> {
    /// Split into the payload or a [`TranslationError::ProviderError`]
    pub fn into_data(self) -> Result<T> {
        match self {
            ProviderResponse::Success { data } => Ok(data),
            ProviderResponse::Failure { error } => Err(TranslationError::ProviderError {
                message: provider_message(&error),
            }),
        }
    }
}

/// Google nests the message under `error.message`; fall back to the raw JSON.
fn provider_message(error: &Value) -> String {
    error
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| error.to_string())
}

/// `data` payload of the supported-languages endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguagesData {
    /// Supported languages
    #[serde(default)]
    pub languages: Vec<LanguageEntry>,
}

/// One supported language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    /// Provider code, e.g. `fr`
    pub language: String,
    /// Display name, e.g. `French`
    pub name: String,
}

/// `data` payload of the translate endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslationsData {
    /// Candidates in provider order
    #[serde(default)]
    pub translations: Vec<TranslationCandidate>,
}

/// One translation candidate; the first one is the one we use
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationCandidate {
    /// Text in the target language
    pub translated_text: String,
    /// Code of the language the provider detected
    #[serde(default)]
    pub detected_source_language: Option<String>,
}

/// Translation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    /// Translated text
    pub text: String,
    /// Display name of the detected source language, when the catalog knows it
    pub language: Option<String>,
    /// Raw provider code of the detected source language
    pub source_code: Option<String>,
}

impl TranslationResult {
    /// Language as shown to users: name, else raw code, else a placeholder
    pub fn language_label(&self) -> &str {
        self.language
            .as_deref()
            .or(self.source_code.as_deref())
            .unwrap_or("an unknown language")
    }
}

/// What a translate call produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    /// A candidate was found
    Translated(TranslationResult),
    /// Provider answered but offered no candidate
    NoCandidate,
    /// Provider answered with an error envelope
    ProviderError(String),
}

impl TranslationOutcome {
    /// Collapse into "a translation or nothing"
    pub fn into_result(self) -> Option<TranslationResult> {
        match self {
            TranslationOutcome::Translated(result) => Some(result),
            TranslationOutcome::NoCandidate | TranslationOutcome::ProviderError(_) => None,
        }
    }
}

/// What a catalog fetch produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    /// Number of languages recorded
    Loaded(usize),
    /// Provider answered with an error envelope
    ProviderError(String),
}

impl fmt::Display for CatalogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogStatus::Loaded(count) => write!(f, "loaded {} languages", count),
            CatalogStatus::ProviderError(message) => write!(f, "provider error: {}", message),
        }
    }
}
