use super::*;

#[test]
fn test_finish_reason_default() {
    assert_eq!(FinishReason::default(), FinishReason::Stop);
}

#[test]
fn test_finish_reason_serialization() {
    let json = serde_json::to_string(&FinishReason::ContentFilter).unwrap();
    assert_eq!(json, "\"content_filter\"");
    let json = serde_json::to_string(&FinishReason::ToolCalls).unwrap();
    assert_eq!(json, "\"tool_calls\"");
}

#[test]
fn test_finish_reason_from_vendor() {
    assert_eq!(FinishReason::from_vendor(Some("stop")), FinishReason::Stop);
    assert_eq!(FinishReason::from_vendor(Some("end_turn")), FinishReason::Stop);
    assert_eq!(FinishReason::from_vendor(Some("length")), FinishReason::Length);
    assert_eq!(FinishReason::from_vendor(Some("max_tokens")), FinishReason::Length);
    assert_eq!(FinishReason::from_vendor(Some("tool_use")), FinishReason::ToolCalls);
    assert_eq!(
        FinishReason::from_vendor(Some("content_filter")),
        FinishReason::ContentFilter
    );
    assert_eq!(FinishReason::from_vendor(None), FinishReason::Stop);
    assert_eq!(FinishReason::from_vendor(Some("something_new")), FinishReason::Stop);
}

#[test]
fn test_usage_new_totals() {
    let usage = Usage::new(10, 5);
    assert_eq!(usage.total_tokens, 15);
}

#[test]
fn test_usage_new_saturates() {
    let usage = Usage::new(u32::MAX, 1);
    assert_eq!(usage.total_tokens, u32::MAX);
}

#[test]
fn test_estimate_tokens_rounds_up() {
    assert_eq!(estimate_tokens(""), 0);
    assert_eq!(estimate_tokens("abc"), 1);
    assert_eq!(estimate_tokens("abcd"), 1);
    assert_eq!(estimate_tokens("abcde"), 2);
}

#[test]
fn test_usage_estimate() {
    let usage = Usage::estimate("12345678", "1234");
    assert_eq!(usage.prompt_tokens, 2);
    assert_eq!(usage.completion_tokens, 1);
    assert_eq!(usage.total_tokens, 3);
}
