use super::*;

#[test]
fn test_parse_text_blocks_concatenated() {
    let body = r#"{
        "id": "msg_01",
        "type": "message",
        "role": "assistant",
        "model": "claude-3-5-sonnet-20241022",
        "content": [{"type": "text", "text": "Hello"}, {"type": "text", "text": " world"}],
        "stop_reason": "end_turn",
        "usage": {"input_tokens": 12, "output_tokens": 3}
    }"#;
    let response = parse_response(body, "hi").unwrap();
    assert_eq!(response.id, "msg_01");
    assert_eq!(response.content, "Hello world");
    assert_eq!(response.usage.prompt_tokens, 12);
    assert_eq!(response.usage.total_tokens, 15);
    assert_eq!(response.finish_reason, FinishReason::Stop);
}

#[test]
fn test_parse_skips_non_text_blocks() {
    let body = r#"{
        "id": "msg_02", "model": "m",
        "content": [{"type": "tool_use", "id": "t", "name": "x", "input": {}}, {"type": "text", "text": "done"}],
        "stop_reason": "tool_use"
    }"#;
    let response = parse_response(body, "abcd").unwrap();
    assert_eq!(response.content, "done");
    assert_eq!(response.finish_reason, FinishReason::ToolCalls);
    assert_eq!(response.usage.prompt_tokens, 1);
}

#[test]
fn test_parse_max_tokens_stop_reason() {
    assert_eq!(parse_stop_reason(Some("max_tokens")), FinishReason::Length);
    assert_eq!(parse_stop_reason(Some("stop_sequence")), FinishReason::Stop);
    assert_eq!(parse_stop_reason(None), FinishReason::Stop);
}

#[test]
fn test_parse_empty_content_is_protocol_error() {
    let body = r#"{"id": "msg_03", "model": "m", "content": []}"#;
    assert!(matches!(parse_response(body, "p"), Err(ProviderError::Protocol(_))));
}

#[test]
fn test_parse_missing_id_is_protocol_error() {
    let body = r#"{"content": [{"type": "text", "text": "x"}]}"#;
    assert!(matches!(parse_response(body, "p"), Err(ProviderError::Protocol(_))));
}
