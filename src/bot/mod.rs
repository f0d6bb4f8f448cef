//! Chat-facing side: memory, catalog, gateway and the handlers tying them together

pub mod assistant;
pub mod catalog;
pub mod commands;
pub mod events;
pub mod gateway;
pub mod memory;
