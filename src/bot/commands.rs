//! Mention patterns the assistant reacts to

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Usage line and description registered with the host's help
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HelpEntry {
    /// How to invoke the command
    pub usage: &'static str,
    /// What the command does
    pub description: &'static str,
}

/// Help entries, in registration order
pub const HELP: [HelpEntry; 2] = [
    HelpEntry {
        usage: "translate <phrase>",
        description: "Translate the given <phrase>.",
    },
    HelpEntry {
        usage: "what did @<nickname> just say?",
        description: "Translate the last thing <nickname> said.",
    },
];

/// A mention the assistant understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mention {
    /// "what did @alice just say?"
    WhatDidTheySay {
        /// Nickname to look up, ASCII word characters only
        nickname: String,
    },
    /// "translate <phrase>"
    Translate {
        /// Everything after `translate `
        phrase: String,
    },
}

fn what_did_they_say() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^what did @?((?-u:\w)+)(?: just)? say\??$").expect("valid mention pattern")
    })
}

fn translate() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)^translate (.*)$").expect("valid mention pattern"))
}

impl Mention {
    /// Match mention text against the known patterns, first match wins
    pub fn parse(text: &str) -> Option<Self> {
        if let Some(caps) = what_did_they_say().captures(text) {
            return Some(Mention::WhatDidTheySay {
                nickname: caps[1].to_string(),
            });
        }

        translate().captures(text).map(|caps| Mention::Translate {
            phrase: caps[1].to_string(),
        })
    }
}
