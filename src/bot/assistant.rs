//! The translation assistant: event handlers over shared catalog and memory

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::bot::catalog::LanguageCatalog;
use crate::bot::commands::{HelpEntry, Mention, HELP};
use crate::bot::events::{ChatContext, ChatEvent, HostEvent};
use crate::bot::gateway::TranslationGateway;
use crate::bot::memory::UtteranceMemory;
use crate::core::client::ProviderClient;
use crate::core::config::TranslatorConfig;
use crate::core::errors::Result;
use crate::core::models::{CatalogStatus, LanguageEntry, TranslationResult};

/// Reply when the requested user has no remembered message
pub const NOTHING_SAID_REPLY: &str = "They haven't said anything yet.";

/// Reply when no translation could be produced
pub const NO_IDEA_REPLY: &str = "I have no idea.";

/// Owns the language catalog, the utterance memory and the gateway.
///
/// Locks are only held for in-memory reads and writes, never across the
/// outbound provider call, so concurrent mentions do not serialize on the
/// network.
#[derive(Debug)]
pub struct TranslationAssistant {
    gateway: TranslationGateway,
    catalog: RwLock<LanguageCatalog>,
    memory: RwLock<UtteranceMemory>,
}

impl TranslationAssistant {
    /// Create an assistant around an existing provider client
    pub fn new(client: ProviderClient) -> Self {
        Self {
            gateway: TranslationGateway::new(client),
            catalog: RwLock::new(LanguageCatalog::new()),
            memory: RwLock::new(UtteranceMemory::new()),
        }
    }

    /// Create an assistant from configuration
    pub fn from_config(config: TranslatorConfig) -> Result<Self> {
        Ok(Self::new(ProviderClient::new(config)?))
    }

    /// Help entries to register with the host
    pub fn help(&self) -> &'static [HelpEntry] {
        &HELP
    }

    /// Configuration the provider client was built with
    pub fn config(&self) -> &TranslatorConfig {
        self.gateway.client().config()
    }

    /// Connect handler: load the language catalog.
    ///
    /// Never fails; provider and transport errors are logged and the
    /// catalog keeps whatever it had (nothing, on first connect).
    pub async fn on_connect(&self) -> Option<CatalogStatus> {
        let mut fetched = LanguageCatalog::new();
        match fetched.initialize(self.gateway.client()).await {
            Ok(status) => {
                if let CatalogStatus::Loaded(_) = status {
                    self.catalog.write().await.extend(fetched.entries());
                }
                Some(status)
            }
            Err(e) => {
                warn!("Could not fetch supported languages: {}", e);
                None
            }
        }
    }

    /// Hear handler: remember what was said, whatever it was
    pub async fn hear(&self, chat: &ChatEvent) {
        self.memory.write().await.record(
            chat.context.room(),
            chat.context.nickname(),
            &chat.message,
        );
    }

    /// Mention handler: `None` when the text matches no known pattern
    pub async fn mention(&self, chat: &ChatEvent) -> Option<String> {
        match Mention::parse(chat.message.trim())? {
            Mention::WhatDidTheySay { nickname } => {
                Some(self.what_did_they_say(&chat.context, &nickname).await)
            }
            Mention::Translate { phrase } => Some(self.translate_phrase(&phrase).await),
        }
    }

    /// Translate the last thing `nickname` said in the context's room
    pub async fn what_did_they_say(&self, context: &ChatContext, nickname: &str) -> String {
        let message = self
            .memory
            .read()
            .await
            .lookup(context.room(), nickname)
            .map(str::to_string);

        let Some(message) = message else {
            return NOTHING_SAID_REPLY.to_string();
        };

        match self.translate(&message).await {
            Some(result) => format!(
                "They said \"{}\", in {}.",
                result.text,
                result.language_label()
            ),
            None => NO_IDEA_REPLY.to_string(),
        }
    }

    /// Translate a phrase given inline
    pub async fn translate_phrase(&self, phrase: &str) -> String {
        match self.translate(phrase).await {
            Some(result) => format!(
                "Translation from {}: \"{}\"",
                result.language_label(),
                result.text
            ),
            None => NO_IDEA_REPLY.to_string(),
        }
    }

    /// Translate `text`, degrading every failure to `None`
    pub async fn translate(&self, text: &str) -> Option<TranslationResult> {
        match self.gateway.translate(text, &self.catalog).await {
            Ok(outcome) => outcome.into_result(),
            Err(e) => {
                warn!("Translation request failed: {}", e);
                None
            }
        }
    }

    /// Display name for a language code, if the catalog has it
    pub async fn language_name(&self, code: &str) -> Option<String> {
        self.catalog.read().await.name_of(code).map(str::to_string)
    }

    /// Catalog contents sorted by code
    pub async fn languages(&self) -> Vec<LanguageEntry> {
        self.catalog.read().await.entries()
    }

    /// Last remembered message for (room, nickname)
    pub async fn last_said(&self, room: Option<&str>, nickname: &str) -> Option<String> {
        self.memory
            .read()
            .await
            .lookup(room, nickname)
            .map(str::to_string)
    }

    /// Dispatch a host event, returning the replies to post.
    ///
    /// Messages are always heard before mention handling.
    pub async fn handle(&self, event: HostEvent) -> Vec<String> {
        match event {
            HostEvent::Connect => {
                if let Some(status) = self.on_connect().await {
                    info!("Connected: {}", status);
                }
                Vec::new()
            }
            HostEvent::Message { chat, mention } => {
                self.hear(&chat).await;
                if !mention {
                    return Vec::new();
                }
                match self.mention(&chat).await {
                    Some(reply) => vec![reply],
                    None => {
                        debug!("Ignoring mention with no matching pattern");
                        Vec::new()
                    }
                }
            }
        }
    }
}
