use super::*;
use switchboard_protocols::ChatMessage;
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

fn hello() -> ChatRequest {
    ChatRequest::new("", vec![ChatMessage::system("Be kind"), ChatMessage::user("Hello")])
}

fn provider_for(server: &MockServer) -> AnthropicProvider {
    AnthropicProvider::new(
        ProviderSettings::new()
            .with_api_key("sk-ant-test")
            .with_base_url(server.uri()),
    )
}

fn message_body(text: &str) -> String {
    serde_json::json!({
        "id": "msg_123",
        "type": "message",
        "role": "assistant",
        "model": "claude-3-5-haiku-latest",
        "content": [{"type": "text", "text": text}],
        "stop_reason": "end_turn",
        "usage": {"input_tokens": 10, "output_tokens": 20}
    })
    .to_string()
}

#[test]
fn test_provider_defaults() {
    let provider = AnthropicProvider::new(ProviderSettings::new());
    assert_eq!(provider.id(), "anthropic");
    assert_eq!(provider.default_model(), DEFAULT_MODEL);
    assert_eq!(provider.base_url, DEFAULT_BASE_URL);
    assert_eq!(provider.descriptor().rate_limit_per_minute, DEFAULT_RATE_LIMIT);
    assert!(provider.descriptor().requires_api_key);
    assert!(!provider.is_configured());
    assert_eq!(provider.kind(), ProviderKind::Cloud);
}

#[tokio::test]
async fn test_generate_success() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::path("/v1/messages"))
        .and(matchers::header("x-api-key", "sk-ant-test"))
        .and(matchers::header("anthropic-version", API_VERSION))
        .and(matchers::body_partial_json(serde_json::json!({
            "system": "Be kind",
            "messages": [{"role": "user", "content": "Hello"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(message_body("Hi there!")))
        .expect(1)
        .mount(&server)
        .await;

    let response = provider_for(&server).generate(hello()).await.unwrap();
    assert_eq!(response.content, "Hi there!");
    assert_eq!(response.model, "claude-3-5-haiku-latest");
    assert_eq!(response.usage.total_tokens, 30);
}

#[tokio::test]
async fn test_generate_api_error_message_extracted() {
    let server = MockServer::start().await;
    let error_body = r#"{"type": "error", "error": {"type": "overloaded_error", "message": "Overloaded"}}"#;
    Mock::given(matchers::method("POST"))
        .and(matchers::path("/v1/messages"))
        .respond_with(ResponseTemplate::new(529).set_body_string(error_body))
        .expect(1)
        .mount(&server)
        .await;

    match provider_for(&server).generate(hello()).await.unwrap_err() {
        ProviderError::Upstream { status, message } => {
            assert_eq!(status, 529);
            assert_eq!(message, "Overloaded");
        }
        other => panic!("Expected Upstream, got {:?}", other),
    }
}

#[tokio::test]
async fn test_generate_empty_content_is_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"id": "msg", "model": "m", "content": []}"#),
        )
        .mount(&server)
        .await;

    let err = provider_for(&server).generate(hello()).await.unwrap_err();
    assert!(matches!(err, ProviderError::Protocol(_)));
}

#[tokio::test]
async fn test_generate_timeout() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(message_body("late"))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let provider = AnthropicProvider::new(
        ProviderSettings::new()
            .with_api_key("k")
            .with_base_url(server.uri())
            .with_timeout(Duration::from_millis(50)),
    );
    let err = provider.generate(hello()).await.unwrap_err();
    assert!(matches!(err, ProviderError::Timeout(_)));
}

#[tokio::test]
async fn test_generate_without_key_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let provider = AnthropicProvider::new(ProviderSettings::new().with_base_url(server.uri()));
    let err = provider.generate(hello()).await.unwrap_err();
    assert!(err.is_configuration_error());
}

#[tokio::test]
async fn test_is_available() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/v1/models"))
        .and(matchers::header("x-api-key", "sk-ant-test"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data": []}"#))
        .expect(1)
        .mount(&server)
        .await;

    assert!(provider_for(&server).is_available().await);
}

#[tokio::test]
async fn test_is_available_false_on_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    assert!(!provider_for(&server).is_available().await);
}

#[tokio::test]
async fn test_is_available_false_without_key() {
    assert!(!AnthropicProvider::new(ProviderSettings::new()).is_available().await);
}
