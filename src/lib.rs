//! Hermes Translate - chat bot plugin that translates what people said
//!
//! The assistant remembers the last message each user posted in each room,
//! loads the provider's language list on connect, and answers
//! `translate <phrase>` and `what did @<nickname> just say?` mentions.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod bot;
pub mod cli;
pub mod core;
pub mod server;

// Re-export key types for convenience
pub use crate::bot::{
    assistant::TranslationAssistant,
    catalog::LanguageCatalog,
    commands::{HelpEntry, Mention},
    events::{ChatContext, ChatEvent, HostEvent},
    gateway::TranslationGateway,
    memory::UtteranceMemory,
};
pub use crate::core::{
    client::ProviderClient,
    config::TranslatorConfig,
    errors::TranslationError,
    models::{CatalogStatus, LanguageEntry, TranslationOutcome, TranslationResult},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
