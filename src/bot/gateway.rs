//! Translate strings through the provider and shape the result

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::bot::catalog::LanguageCatalog;
use crate::core::client::ProviderClient;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{TranslationOutcome, TranslationResult, TranslationsData};

/// Outbound translation calls
#[derive(Debug, Clone)]
pub struct TranslationGateway {
    client: ProviderClient,
}

impl TranslationGateway {
    /// Wrap a provider client
    pub fn new(client: ProviderClient) -> Self {
        Self { client }
    }

    /// Underlying provider client
    pub fn client(&self) -> &ProviderClient {
        &self.client
    }

    /// Ask the provider for `text` in the target language.
    ///
    /// An error envelope comes back as [`TranslationError::ProviderError`].
    pub async fn fetch(&self, text: &str) -> Result<TranslationsData> {
        debug!("Translating {} chars", text.chars().count());
        self.client.translate(text).await?.into_data()
    }

    /// Turn a provider payload into an outcome, naming the language via `catalog`
    pub fn resolve(data: TranslationsData, catalog: &LanguageCatalog) -> TranslationOutcome {
        let Some(candidate) = data.translations.into_iter().next() else {
            return TranslationOutcome::NoCandidate;
        };

        let language = candidate
            .detected_source_language
            .as_deref()
            .and_then(|code| catalog.name_of(code))
            .map(str::to_string);

        TranslationOutcome::Translated(TranslationResult {
            text: candidate.translated_text,
            language,
            source_code: candidate.detected_source_language,
        })
    }

    /// Fetch and resolve in one go.
    ///
    /// The catalog is only read once the provider has answered. Transport
    /// failures are returned as `Err`.
    pub async fn translate(
        &self,
        text: &str,
        catalog: &RwLock<LanguageCatalog>,
    ) -> Result<TranslationOutcome> {
        match self.fetch(text).await {
            Ok(data) => Ok(Self::resolve(data, &*catalog.read().await)),
            Err(TranslationError::ProviderError { message }) => {
                warn!("Provider refused translation: {}", message);
                Ok(TranslationOutcome::ProviderError(message))
            }
            Err(e) => Err(e),
        }
    }
}
