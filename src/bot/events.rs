//! Events handed to the assistant by the hosting chat framework

use serde::{Deserialize, Serialize};

/// Where a message came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatContext {
    /// Channel the message was posted in; absent for private conversations
    #[serde(default)]
    pub room: Option<String>,
    /// Host user identifier
    pub user: String,
    /// Nickname the host resolved for `user`
    #[serde(default)]
    pub nickname: Option<String>,
}

impl ChatContext {
    /// Context without a resolved nickname
    pub fn new(room: Option<&str>, user: impl Into<String>) -> Self {
        Self {
            room: room.map(str::to_string),
            user: user.into(),
            nickname: None,
        }
    }

    /// Resolved nickname, falling back to the raw user identifier
    pub fn nickname(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.user)
    }

    /// Room the message was posted in, if any
    pub fn room(&self) -> Option<&str> {
        self.room.as_deref()
    }
}

/// A chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEvent {
    /// Where the message came from
    pub context: ChatContext,
    /// Message text as posted
    pub message: String,
}

impl ChatEvent {
    /// Message `message` posted in `context`
    pub fn new(context: ChatContext, message: impl Into<String>) -> Self {
        Self {
            context,
            message: message.into(),
        }
    }
}

/// Inbound event envelope used by the HTTP adapter
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    /// The bot connected to the chat service
    Connect,
    /// Someone posted a message
    Message {
        /// The message itself
        #[serde(flatten)]
        chat: ChatEvent,
        /// Whether the message addressed the bot
        #[serde(default)]
        mention: bool,
    },
}
