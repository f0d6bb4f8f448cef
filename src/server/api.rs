//! HTTP webhook adapter: a chat host posts events, we answer with replies

use axum::{
    extract::{Json, State},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::bot::assistant::TranslationAssistant;
use crate::bot::commands::HelpEntry;
use crate::bot::events::HostEvent;
use crate::core::models::LanguageEntry;

/// Application state
#[derive(Clone)]
pub struct AppState {
    assistant: Arc<TranslationAssistant>,
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
    languages: usize,
}

/// Help list response
#[derive(Serialize)]
struct HelpResponse {
    commands: Vec<HelpEntry>,
}

/// Catalog response
#[derive(Serialize)]
struct LanguagesResponse {
    languages: Vec<LanguageEntry>,
}

/// Replies to post back into the originating chat
#[derive(Serialize)]
pub struct EventResponse {
    /// Reply texts, in order
    pub replies: Vec<String>,
}

/// Health check handler
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: crate::NAME.to_string(),
        version: crate::VERSION.to_string(),
        languages: state.assistant.languages().await.len(),
    })
}

/// Help entries handler
async fn help(State(state): State<Arc<AppState>>) -> Json<HelpResponse> {
    Json(HelpResponse {
        commands: state.assistant.help().to_vec(),
    })
}

/// Catalog handler
async fn languages(State(state): State<Arc<AppState>>) -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: state.assistant.languages().await,
    })
}

/// Event handler
async fn events(
    State(state): State<Arc<AppState>>,
    Json(event): Json<HostEvent>,
) -> Json<EventResponse> {
    let replies = state.assistant.handle(event).await;
    Json(EventResponse { replies })
}

/// Build the router around an assistant
pub fn router(assistant: Arc<TranslationAssistant>) -> Router {
    let state = Arc::new(AppState { assistant });

    Router::new()
        .route("/", get(health_check))
        .route("/help", get(help))
        .route("/languages", get(languages))
        .route("/events", post(events))
        .with_state(state)
}

/// Run the HTTP server
pub async fn run_server(
    assistant: Arc<TranslationAssistant>,
    host: String,
    port: u16,
) -> anyhow::Result<()> {
    // Connect lifecycle event
    if let Some(status) = assistant.on_connect().await {
        info!("Connected: {}", status);
    }

    let app = router(assistant);

    // Bind address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
