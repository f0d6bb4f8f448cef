//! HTTP adapter for hosting frameworks that speak webhooks

pub mod api;
