mod common;

use serde_json::json;

use common::{provider_error, MockProvider};
use hermes_translate::bot::assistant::{NOTHING_SAID_REPLY, NO_IDEA_REPLY};
use hermes_translate::{
    CatalogStatus, ChatContext, ChatEvent, HostEvent, LanguageCatalog, ProviderClient,
    TranslationGateway, TranslationOutcome, TranslationResult, TranslatorConfig,
};
use tokio::sync::RwLock;

fn said(room: Option<&str>, user: &str, message: &str) -> ChatEvent {
    ChatEvent::new(ChatContext::new(room, user), message)
}

#[tokio::test]
async fn test_catalog_empty_before_connect() {
    let mock = MockProvider::start().await;
    let assistant = mock.assistant();

    assert_eq!(assistant.language_name("fr").await, None);
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_connect_loads_catalog() {
    let mock = MockProvider::start().await;
    let assistant = mock.assistant();

    assert_eq!(assistant.on_connect().await, Some(CatalogStatus::Loaded(2)));
    assert_eq!(assistant.language_name("fr").await.as_deref(), Some("French"));
    assert_eq!(assistant.language_name("xx").await, None);

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, "/v2/languages");
    assert_eq!(requests[0].1.get("target").map(String::as_str), Some("en"));
    assert_eq!(requests[0].1.get("key").map(String::as_str), Some("test_key"));
}

#[tokio::test]
async fn test_connect_provider_error_leaves_catalog_empty() {
    let mock = MockProvider::start().await;
    mock.set_languages(provider_error());
    let assistant = mock.assistant();

    assert_eq!(
        assistant.on_connect().await,
        Some(CatalogStatus::ProviderError("API key not valid".to_string()))
    );
    assert!(assistant.languages().await.is_empty());
    assert_eq!(assistant.language_name("fr").await, None);
}

#[tokio::test]
async fn test_failed_reconnect_keeps_catalog() {
    let mock = MockProvider::start().await;
    let assistant = mock.assistant();
    assert_eq!(assistant.on_connect().await, Some(CatalogStatus::Loaded(2)));

    mock.set_languages(provider_error());
    assert_eq!(
        assistant.on_connect().await,
        Some(CatalogStatus::ProviderError("API key not valid".to_string()))
    );
    assert_eq!(assistant.language_name("fr").await.as_deref(), Some("French"));
    assert_eq!(assistant.languages().await.len(), 2);
}

#[tokio::test]
async fn test_reconnect_merges_catalog() {
    let mock = MockProvider::start().await;
    let assistant = mock.assistant();
    assistant.on_connect().await;

    mock.set_languages(json!({
        "data": { "languages": [
            { "language": "fr", "name": "Français" },
            { "language": "de", "name": "German" }
        ]}
    }));
    assert_eq!(assistant.on_connect().await, Some(CatalogStatus::Loaded(2)));

    assert_eq!(assistant.language_name("fr").await.as_deref(), Some("Français"));
    assert_eq!(assistant.language_name("de").await.as_deref(), Some("German"));
    assert_eq!(assistant.language_name("es").await.as_deref(), Some("Spanish"));
}

#[tokio::test]
async fn test_gateway_reports_provider_error() {
    let mock = MockProvider::start().await;
    mock.set_translation(provider_error());

    let config = TranslatorConfig::new("test_key").with_endpoint(mock.endpoint());
    let gateway = TranslationGateway::new(ProviderClient::new(config).unwrap());
    let catalog = RwLock::new(LanguageCatalog::new());

    assert_eq!(
        gateway.translate("bonjour", &catalog).await.unwrap(),
        TranslationOutcome::ProviderError("API key not valid".to_string())
    );
}

#[tokio::test]
async fn test_gateway_names_language_from_catalog() {
    let mock = MockProvider::start().await;
    let client = ProviderClient::new(
        TranslatorConfig::new("test_key").with_endpoint(mock.endpoint()),
    )
    .unwrap();

    let mut catalog = LanguageCatalog::new();
    catalog.initialize(&client).await.unwrap();
    let gateway = TranslationGateway::new(client);

    let outcome = gateway
        .translate("bonjour", &RwLock::new(catalog))
        .await
        .unwrap();
    assert_eq!(
        outcome.into_result().and_then(|result| result.language),
        Some("French".to_string())
    );
}

#[tokio::test]
async fn test_translate_provider_error_is_none() {
    let mock = MockProvider::start().await;
    mock.set_translation(provider_error());
    let assistant = mock.assistant();

    assert_eq!(assistant.translate("bonjour").await, None);
}

#[tokio::test]
async fn test_translate_names_language() {
    let mock = MockProvider::start().await;
    let assistant = mock.assistant();
    assistant.on_connect().await;

    assert_eq!(
        assistant.translate("bonjour").await,
        Some(TranslationResult {
            text: "Bonjour".to_string(),
            language: Some("French".to_string()),
            source_code: Some("fr".to_string()),
        })
    );

    let (path, query) = mock.requests().pop().unwrap();
    assert_eq!(path, "/v2");
    assert_eq!(query.get("q").map(String::as_str), Some("bonjour"));
    assert_eq!(query.get("target").map(String::as_str), Some("en"));
}

#[tokio::test]
async fn test_what_did_they_say_end_to_end() {
    let mock = MockProvider::start().await;
    let assistant = mock.assistant();
    assistant.handle(HostEvent::Connect).await;

    assistant.hear(&said(Some("general"), "alice", "hello")).await;

    let replies = assistant
        .handle(HostEvent::Message {
            chat: said(Some("general"), "bob", "what did @alice just say?"),
            mention: true,
        })
        .await;
    assert_eq!(replies, vec!["They said \"Bonjour\", in French.".to_string()]);

    // The stored message is what went to the provider
    let (_, query) = mock.requests().pop().unwrap();
    assert_eq!(query.get("q").map(String::as_str), Some("hello"));
}

#[tokio::test]
async fn test_translate_phrase_end_to_end() {
    let mock = MockProvider::start().await;
    let assistant = mock.assistant();
    assistant.on_connect().await;

    let reply = assistant
        .mention(&said(Some("general"), "alice", "translate bonjour"))
        .await;
    assert_eq!(reply.as_deref(), Some("Translation from French: \"Bonjour\""));
}

#[tokio::test]
async fn test_translate_without_candidates_end_to_end() {
    let mock = MockProvider::start().await;
    mock.set_translation(json!({ "data": { "translations": [] } }));
    let assistant = mock.assistant();
    assistant.on_connect().await;

    let reply = assistant
        .mention(&said(Some("general"), "alice", "translate bonjour"))
        .await;
    assert_eq!(reply.as_deref(), Some(NO_IDEA_REPLY));
}

#[tokio::test]
async fn test_bob_never_spoke_end_to_end() {
    let mock = MockProvider::start().await;
    let assistant = mock.assistant();
    assistant.hear(&said(Some("general"), "alice", "hello")).await;
    assistant.hear(&said(Some("random"), "bob", "hola")).await;

    let reply = assistant
        .mention(&said(Some("general"), "alice", "what did @bob just say?"))
        .await;
    assert_eq!(reply.as_deref(), Some(NOTHING_SAID_REPLY));

    // No outbound call was needed
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_unknown_language_falls_back_to_code() {
    let mock = MockProvider::start().await;
    mock.set_translation(json!({
        "data": { "translations": [
            { "translatedText": "Good morning", "detectedSourceLanguage": "ja" }
        ]}
    }));
    let assistant = mock.assistant();
    assistant.on_connect().await;
    assistant.hear(&said(None, "kenji", "おはよう")).await;

    let reply = assistant
        .mention(&said(None, "alice", "what did kenji say"))
        .await;
    assert_eq!(reply.as_deref(), Some("They said \"Good morning\", in ja."));
}

#[tokio::test]
async fn test_non_json_body_degrades() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = axum::Router::new().route("/v2", axum::routing::get(|| async { "<html>oops</html>" }));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = TranslatorConfig::new("test_key").with_endpoint(format!("http://{}/v2", addr));
    let assistant = hermes_translate::TranslationAssistant::from_config(config).unwrap();

    let reply = assistant
        .mention(&said(None, "alice", "translate hola"))
        .await;
    assert_eq!(reply.as_deref(), Some(NO_IDEA_REPLY));
}
