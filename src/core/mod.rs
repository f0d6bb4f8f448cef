//! Provider plumbing: client, configuration, errors and wire models

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
