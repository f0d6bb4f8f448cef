//! Last-utterance cache keyed by room and nickname

use std::collections::HashMap;
use tracing::debug;

/// Room key used when an event carries no room
pub const PRIVATE_ROOM: &str = "private";

/// Resolve an optional room into the key used by the memory
pub fn room_key(room: Option<&str>) -> &str {
    room.unwrap_or(PRIVATE_ROOM)
}

/// Remembers the single most recent message per (room, user)
#[derive(Debug, Default, Clone)]
pub struct UtteranceMemory {
    rooms: HashMap<String, HashMap<String, String>>,
}

impl UtteranceMemory {
    /// Empty memory
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `message` as the latest thing `user` said in `room`
    pub fn record(&mut self, room: Option<&str>, user: &str, message: &str) {
        let room = room_key(room);
        debug!("Remembering message from {} in {}", user, room);
        self.rooms
            .entry(room.to_string())
            .or_default()
            .insert(user.to_string(), message.to_string());
    }

    /// Latest message `user` said in `room`, if any
    pub fn lookup(&self, room: Option<&str>, user: &str) -> Option<&str> {
        self.rooms
            .get(room_key(room))
            .and_then(|users| users.get(user))
            .map(String::as_str)
    }

    /// Number of rooms seen so far
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
