//! Chat request types.

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::types::{ChatMessage, MessageRole};

/// Sampling temperature used when the caller does not choose one.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Completion budget used when the caller does not choose one.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Request for a chat completion.
///
/// Built per call and never persisted. `temperature` and `top_p` are not
/// clamped here; vendors enforce their own ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation, most recent message last.
    pub messages: Vec<ChatMessage>,

    /// Model identifier. Empty means "adapter default".
    #[serde(default)]
    pub model: String,

    /// Temperature for sampling (0.0 - 2.0).
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Nucleus sampling (0.0 - 1.0).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub top_p: Option<f32>,

    /// Whether the caller asked for streaming. Responses are always complete.
    #[serde(default)]
    pub stream: bool,
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

impl ChatRequest {
    /// Create a new chat request with default sampling parameters.
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            top_p: None,
            stream: false,
        }
    }

    /// Set the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set max tokens.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set top-p.
    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// Reject requests that no adapter can serve.
    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.messages.is_empty() {
            return Err(ProviderError::InvalidRequest(
                "Messages array is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Model to send, falling back to the adapter default when unset.
    pub fn model_or<'a>(&'a self, default_model: &'a str) -> &'a str {
        if self.model.trim().is_empty() {
            default_model
        } else {
            &self.model
        }
    }

    /// Content of the honored system message (the first one), if any.
    pub fn system_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == MessageRole::System)
            .map(|m| m.content.as_str())
    }

    /// Non-system messages in their original order.
    pub fn conversation(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter().filter(|m| m.role != MessageRole::System)
    }

    /// Messages for APIs that take the system prompt inline.
    ///
    /// At most one system message survives and it is always first.
    pub fn ordered_messages(&self) -> Vec<ChatMessage> {
        let mut ordered = Vec::with_capacity(self.messages.len());
        if let Some(system) = self.system_prompt() {
            ordered.push(ChatMessage::system(system));
        }
        ordered.extend(self.conversation().cloned());
        ordered
    }

    /// Content of the most recent user message.
    pub fn last_user_message(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::User)
            .map(|m| m.content.as_str())
    }

    /// All message text joined, used for usage estimates.
    pub fn prompt_text(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
