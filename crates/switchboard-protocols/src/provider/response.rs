//! Chat response types.

use serde::{Deserialize, Serialize};

use crate::types::{FinishReason, Usage};

/// Response from a chat completion.
///
/// Lives for a single request/response cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Opaque completion identifier.
    pub id: String,

    /// Generated text.
    pub content: String,

    /// Model that produced the text.
    pub model: String,

    /// Token usage, estimated when the vendor omits it.
    pub usage: Usage,

    pub finish_reason: FinishReason,

    /// Wall-clock time spent in the adapter.
    pub processing_time_ms: u64,

    /// Provider that answered, set by the orchestrator.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub selected_provider: Option<String>,

    /// True when the text is a locally synthesized canned response.
    #[serde(default)]
    pub fallback: bool,
}

impl ChatResponse {
    pub fn new(id: impl Into<String>, model: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            model: model.into(),
            usage: Usage::default(),
            finish_reason: FinishReason::Stop,
            processing_time_ms: 0,
            selected_provider: None,
            fallback: false,
        }
    }

    pub fn with_usage(mut self, usage: Usage) -> Self {
        self.usage = usage;
        self
    }

    pub fn with_finish_reason(mut self, finish_reason: FinishReason) -> Self {
        self.finish_reason = finish_reason;
        self
    }

    pub fn with_processing_time(mut self, millis: u64) -> Self {
        self.processing_time_ms = millis;
        self
    }

    /// Tag the response with the provider that produced it.
    pub fn with_selected_provider(mut self, provider_id: impl Into<String>) -> Self {
        self.selected_provider = Some(provider_id.into());
        self
    }

    /// Mark the response as a canned fallback.
    pub fn as_fallback(mut self) -> Self {
        self.fallback = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_response_new() {
        let response = ChatResponse::new("id-1", "gpt-4o", "Hello");
        assert_eq!(response.id, "id-1");
        assert_eq!(response.model, "gpt-4o");
        assert_eq!(response.content, "Hello");
        assert_eq!(response.finish_reason, FinishReason::Stop);
        assert!(response.selected_provider.is_none());
        assert!(!response.fallback);
    }

    #[test]
    fn test_chat_response_builders() {
        let response = ChatResponse::new("id", "m", "x")
            .with_usage(Usage::new(3, 4))
            .with_finish_reason(FinishReason::Length)
            .with_processing_time(42)
            .with_selected_provider("groq")
            .as_fallback();
        assert_eq!(response.usage.total_tokens, 7);
        assert_eq!(response.finish_reason, FinishReason::Length);
        assert_eq!(response.processing_time_ms, 42);
        assert_eq!(response.selected_provider.as_deref(), Some("groq"));
        assert!(response.fallback);
    }

    #[test]
    fn test_chat_response_serialization_skips_missing_provider() {
        let response = ChatResponse::new("id", "m", "x");
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("selected_provider").is_none());
        assert_eq!(json["fallback"], false);
        assert_eq!(json["finish_reason"], "stop");
    }
}
