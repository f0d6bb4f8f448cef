//! CLI command definitions and handlers

use clap::Subcommand;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::bot::assistant::TranslationAssistant;
use crate::bot::events::{ChatContext, ChatEvent, HostEvent};

/// Commands for the translation assistant
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP webhook server
    Serve {
        /// Bind address (default: 0.0.0.0)
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Listen port (default: 8000)
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
    },

    /// Chat with the assistant on stdin
    Chat {
        /// Room to speak in (omit for a private conversation)
        #[arg(short, long)]
        room: Option<String>,

        /// Nickname to speak as
        #[arg(short, long, default_value = "me")]
        user: String,
    },

    /// List the provider's supported languages
    Languages,

    /// Translate a phrase once and exit
    Translate {
        /// Phrase to translate
        #[arg(required = true, num_args = 1..)]
        phrase: Vec<String>,
    },
}

/// Handle the server command
pub async fn handle_serve(
    assistant: TranslationAssistant,
    host: String,
    port: u16,
) -> anyhow::Result<()> {
    crate::server::api::run_server(Arc::new(assistant), host, port).await
}

/// Text of `line` after the bot's name, if the line addresses the bot.
///
/// Accepts `hermes: ...`, `hermes, ...` and `@hermes ...`, ignoring case.
pub fn addressed_text<'a>(line: &'a str, bot_name: &str) -> Option<&'a str> {
    let line = line.trim();
    let rest = line.strip_prefix('@').unwrap_or(line);
    if rest.len() < bot_name.len() || !rest.is_char_boundary(bot_name.len()) {
        return None;
    }

    let (head, tail) = rest.split_at(bot_name.len());
    if !head.eq_ignore_ascii_case(bot_name) {
        return None;
    }

    let with_at = rest.len() != line.len();
    let tail = match tail.strip_prefix(&[':', ','][..]) {
        Some(tail) => tail,
        None if with_at && tail.starts_with(char::is_whitespace) => tail,
        None => return None,
    };

    Some(tail.trim()).filter(|text| !text.is_empty())
}

/// Handle the interactive chat command
pub async fn handle_chat(
    assistant: TranslationAssistant,
    room: Option<String>,
    user: String,
) -> anyhow::Result<()> {
    if let Some(status) = assistant.on_connect().await {
        info!("Connected: {}", status);
    }

    let bot_name = assistant.config().bot_name.clone();
    println!("Talking as {} in {}.", user, room.as_deref().unwrap_or("private"));
    println!("Address the bot with \"{}: ...\". Commands:", bot_name);
    for entry in assistant.help() {
        println!("  {}  {}", entry.usage, entry.description);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let context = ChatContext::new(room.as_deref(), user.clone());
        let addressed = addressed_text(&line, &bot_name).map(str::to_string);

        // Everything is heard, addressed lines included
        assistant
            .handle(HostEvent::Message {
                chat: ChatEvent::new(context.clone(), line),
                mention: false,
            })
            .await;

        if let Some(text) = addressed {
            match assistant.mention(&ChatEvent::new(context, text)).await {
                Some(reply) => println!("{}> {}", bot_name, reply),
                None => println!("{}> Try \"{}: translate <phrase>\".", bot_name, bot_name),
            }
        }
    }

    Ok(())
}

/// Handle the languages command
pub async fn handle_languages(assistant: TranslationAssistant) -> anyhow::Result<()> {
    match assistant.on_connect().await {
        Some(status) => info!("Catalog {}", status),
        None => anyhow::bail!("Could not reach the translation provider"),
    }

    let languages = assistant.languages().await;
    if languages.is_empty() {
        println!("No languages available.");
    }
    for entry in languages {
        println!("{:<8} {}", entry.language, entry.name);
    }

    Ok(())
}

/// Handle the one-shot translate command
pub async fn handle_translate(
    assistant: TranslationAssistant,
    phrase: Vec<String>,
) -> anyhow::Result<()> {
    assistant.on_connect().await;
    let reply = assistant.translate_phrase(&phrase.join(" ")).await;
    println!("{}", reply);
    Ok(())
}
