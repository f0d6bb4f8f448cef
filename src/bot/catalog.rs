//! Provider language codes mapped to display names

use std::collections::HashMap;
use tracing::{info, warn};

use crate::core::client::ProviderClient;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{CatalogStatus, LanguageEntry};

/// Supported-language catalog, filled once on connect
#[derive(Debug, Default, Clone)]
pub struct LanguageCatalog {
    names: HashMap<String, String>,
}

impl LanguageCatalog {
    /// Empty catalog; every lookup misses until [`LanguageCatalog::initialize`] runs
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the provider's languages and record them.
    ///
    /// A provider error leaves the catalog untouched and is reported as
    /// [`CatalogStatus::ProviderError`]; transport failures come back as `Err`.
    pub async fn initialize(&mut self, client: &ProviderClient) -> Result<CatalogStatus> {
        match client.supported_languages().await?.into_data() {
            Ok(data) => {
                let count = self.extend(data.languages);
                info!("Language catalog loaded with {} entries", count);
                Ok(CatalogStatus::Loaded(count))
            }
            Err(TranslationError::ProviderError { message }) => {
                warn!("Provider refused language list: {}", message);
                Ok(CatalogStatus::ProviderError(message))
            }
            Err(e) => Err(e),
        }
    }

    /// Record code → name pairs, returning how many were seen
    pub fn extend(&mut self, entries: impl IntoIterator<Item = LanguageEntry>) -> usize {
        let mut count = 0;
        for entry in entries {
            self.names.insert(entry.language, entry.name);
            count += 1;
        }
        count
    }

    /// Display name for a provider code
    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    /// Number of known languages
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing has been loaded
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Entries sorted by code
    pub fn entries(&self) -> Vec<LanguageEntry> {
        let mut entries: Vec<LanguageEntry> = self
            .names
            .iter()
            .map(|(language, name)| LanguageEntry {
                language: language.clone(),
                name: name.clone(),
            })
            .collect();
        entries.sort_by(|a, b| a.language.cmp(&b.language));
        entries
    }
}
