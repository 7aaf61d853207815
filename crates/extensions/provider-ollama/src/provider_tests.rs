use super::*;
use switchboard_protocols::ChatMessage;
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

fn hi() -> ChatRequest {
    ChatRequest::new("llama3", vec![ChatMessage::user("hi")])
}

fn provider_for(server: &MockServer) -> OllamaProvider {
    OllamaProvider::new(ProviderSettings::new().with_base_url(server.uri()))
}

#[test]
fn test_provider_defaults() {
    let provider = OllamaProvider::new(ProviderSettings::new());
    assert_eq!(provider.id(), "ollama");
    assert_eq!(provider.base_url, DEFAULT_BASE_URL);
    assert_eq!(provider.default_model(), "llama3");
    assert_eq!(provider.timeout, DEFAULT_LOCAL_TIMEOUT);
    assert_eq!(provider.kind(), ProviderKind::Local);
    assert!(provider.is_configured());
    assert!(!provider.descriptor().requires_api_key);
    assert_eq!(provider.descriptor().rate_limit_per_minute, 0);
}

#[tokio::test]
async fn test_generate_success() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::path("/api/chat"))
        .and(matchers::body_partial_json(serde_json::json!({
            "model": "llama3",
            "stream": false,
            "messages": [{"role": "user", "content": "hi"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"model": "llama3", "message": {"role": "assistant", "content": "hello"}, "done": true, "eval_count": 1, "prompt_eval_count": 3}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let response = provider_for(&server).generate(hi()).await.unwrap();
    assert_eq!(response.content, "hello");
    assert_eq!(response.usage.total_tokens, 4);
}

#[tokio::test]
async fn test_generate_legacy_response_body() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"response": "hello"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let response = provider_for(&server).generate(hi()).await.unwrap();
    assert_eq!(response.content, "hello");
}

#[tokio::test]
async fn test_generate_model_not_found() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"{"error": "model 'llama9' not found"}"#),
        )
        .mount(&server)
        .await;

    match provider_for(&server).generate(hi()).await.unwrap_err() {
        ProviderError::Upstream { status, message } => {
            assert_eq!(status, 404);
            assert!(message.contains("not found"));
        }
        other => panic!("Expected Upstream, got {:?}", other),
    }
}

#[tokio::test]
async fn test_generate_timeout() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"response": "late"}"#)
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let provider = OllamaProvider::new(
        ProviderSettings::new()
            .with_base_url(server.uri())
            .with_timeout(Duration::from_millis(50)),
    );
    let err = provider.generate(hi()).await.unwrap_err();
    assert!(matches!(err, ProviderError::Timeout(1)));
    assert_eq!(err.to_string(), "Timeout after 1 seconds");
}

#[tokio::test]
async fn test_generate_connection_refused_is_network_error() {
    let provider = OllamaProvider::new(ProviderSettings::new().with_base_url("http://127.0.0.1:1"));
    let err = provider.generate(hi()).await.unwrap_err();
    assert!(matches!(err, ProviderError::Network(_)));
}

#[tokio::test]
async fn test_is_available() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"models": []}"#))
        .expect(1)
        .mount(&server)
        .await;

    assert!(provider_for(&server).is_available().await);
}

#[tokio::test]
async fn test_is_available_false_when_unreachable() {
    let provider = OllamaProvider::new(ProviderSettings::new().with_base_url("http://127.0.0.1:1"));
    assert!(!provider.is_available().await);
}

#[tokio::test]
async fn test_is_available_false_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(!provider_for(&server).is_available().await);
}
