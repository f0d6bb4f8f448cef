//! Local stand-in for the translation provider

#![allow(dead_code)]

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use hermes_translate::{TranslationAssistant, TranslatorConfig};

/// Canned bodies plus a log of the queries the provider received
#[derive(Clone)]
pub struct MockProvider {
    pub languages: Arc<Mutex<Value>>,
    pub translation: Arc<Mutex<Value>>,
    pub requests: Arc<Mutex<Vec<(String, HashMap<String, String>)>>>,
    pub addr: SocketAddr,
}

async fn languages(
    State(mock): State<MockProvider>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    mock.requests
        .lock()
        .unwrap()
        .push(("/v2/languages".to_string(), query));
    Json(mock.languages.lock().unwrap().clone())
}

async fn translate(
    State(mock): State<MockProvider>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    mock.requests.lock().unwrap().push(("/v2".to_string(), query));
    Json(mock.translation.lock().unwrap().clone())
}

impl MockProvider {
    /// Start a provider that knows French and translates everything to "Bonjour"
    pub async fn start() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let mock = MockProvider {
            languages: Arc::new(Mutex::new(json!({
                "data": { "languages": [
                    { "language": "fr", "name": "French" },
                    { "language": "es", "name": "Spanish" }
                ]}
            }))),
            translation: Arc::new(Mutex::new(french_translation())),
            requests: Arc::new(Mutex::new(Vec::new())),
            addr,
        };

        let app = Router::new()
            .route("/v2", get(translate))
            .route("/v2/languages", get(languages))
            .with_state(mock.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        mock
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/v2", self.addr)
    }

    pub fn set_languages(&self, body: Value) {
        *self.languages.lock().unwrap() = body;
    }

    pub fn set_translation(&self, body: Value) {
        *self.translation.lock().unwrap() = body;
    }

    pub fn requests(&self) -> Vec<(String, HashMap<String, String>)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn assistant(&self) -> TranslationAssistant {
        let config = TranslatorConfig::new("test_key").with_endpoint(self.endpoint());
        TranslationAssistant::from_config(config).unwrap()
    }
}

pub fn french_translation() -> Value {
    json!({
        "data": { "translations": [
            { "translatedText": "Bonjour", "detectedSourceLanguage": "fr" }
        ]}
    })
}

pub fn provider_error() -> Value {
    json!({ "error": { "code": 400, "message": "API key not valid" } })
}
