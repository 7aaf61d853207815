use super::*;

#[test]
fn test_parse_full_response() {
    let body = r#"{
        "id": "chatcmpl-123",
        "model": "gpt-4o-mini-2024-07-18",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": "Hello back!"}, "finish_reason": "stop"}],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    }"#;
    let response = parse_response(body, "gpt-4o-mini", "Hello").unwrap();
    assert_eq!(response.id, "chatcmpl-123");
    assert_eq!(response.model, "gpt-4o-mini-2024-07-18");
    assert_eq!(response.content, "Hello back!");
    assert_eq!(response.usage.total_tokens, 15);
    assert_eq!(response.finish_reason, FinishReason::Stop);
}

#[test]
fn test_parse_length_finish_reason() {
    let body = r#"{"choices": [{"message": {"content": "cut"}, "finish_reason": "length"}]}"#;
    let response = parse_response(body, "m", "p").unwrap();
    assert_eq!(response.finish_reason, FinishReason::Length);
}

#[test]
fn test_parse_missing_usage_is_estimated() {
    let body = r#"{"choices": [{"message": {"content": "12345678"}}]}"#;
    let response = parse_response(body, "requested", "abcd").unwrap();
    assert_eq!(response.usage.prompt_tokens, 1);
    assert_eq!(response.usage.completion_tokens, 2);
    assert_eq!(response.model, "requested");
    assert!(response.id.starts_with("chatcmpl-"));
}

#[test]
fn test_parse_no_choices_is_protocol_error() {
    let err = parse_response(r#"{"choices": []}"#, "m", "p").unwrap_err();
    assert!(matches!(err, ProviderError::Protocol(_)));
}

#[test]
fn test_parse_null_content_is_protocol_error() {
    let body = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
    let err = parse_response(body, "m", "p").unwrap_err();
    assert!(matches!(err, ProviderError::Protocol(_)));
}

#[test]
fn test_parse_invalid_json_is_protocol_error() {
    let err = parse_response("<html>oops</html>", "m", "p").unwrap_err();
    assert!(matches!(err, ProviderError::Protocol(_)));
}
