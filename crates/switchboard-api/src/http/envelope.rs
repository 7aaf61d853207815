//! Wire shapes for the proxy endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use switchboard_protocols::{
    ChatMessage, ChatRequest, ChatResponse, FinishReason, ProviderDescriptor,
};

use crate::error::ApiError;

/// Sentinel provider name that routes through the orchestrator.
pub const AUTO_PROVIDER: &str = "auto";

/// Generation parameters as callers send them.
///
/// Accepts both camelCase and snake_case spellings.
#[derive(Debug, Default, Deserialize)]
pub struct PayloadBody {
    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub messages: Option<Vec<ChatMessage>>,

    #[serde(default)]
    pub temperature: Option<f32>,

    #[serde(default, rename = "maxTokens", alias = "max_tokens")]
    pub max_tokens: Option<u32>,

    #[serde(default, rename = "topP", alias = "top_p")]
    pub top_p: Option<f32>,

    #[serde(default)]
    pub stream: Option<bool>,
}

impl PayloadBody {
    pub fn into_request(self) -> Result<ChatRequest, ApiError> {
        let messages = match self.messages {
            Some(messages) if !messages.is_empty() => messages,
            _ => return Err(ApiError::BadRequest("Messages array is required".into())),
        };

        let mut request = ChatRequest::new(self.model.unwrap_or_default(), messages);
        if let Some(temperature) = self.temperature {
            request = request.with_temperature(temperature);
        }
        if let Some(max_tokens) = self.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }
        if let Some(top_p) = self.top_p {
            request = request.with_top_p(top_p);
        }
        // Responses are always delivered whole.
        request.stream = false;
        Ok(request)
    }
}

/// A decoded `POST /agent-proxy` body.
#[derive(Debug)]
pub struct ProxyRequest {
    /// Explicit provider, `None` for auto mode.
    pub provider: Option<String>,
    pub request: ChatRequest,
}

impl ProxyRequest {
    /// Decode raw body bytes.
    ///
    /// The payload may be nested under `payload` or flattened next to
    /// `provider`.
    pub fn from_slice(body: &[u8]) -> Result<Self, ApiError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|_| ApiError::BadRequest("Invalid JSON body".into()))?;
        Self::from_value(value)
    }

    pub fn from_value(mut value: Value) -> Result<Self, ApiError> {
        let Some(object) = value.as_object_mut() else {
            return Err(invalid_payload("expected a JSON object"));
        };

        let provider = match object.remove("provider") {
            None | Some(Value::Null) => None,
            Some(Value::String(id)) => {
                let id = id.trim().to_string();
                if id.is_empty() || id == AUTO_PROVIDER {
                    None
                } else {
                    Some(id)
                }
            }
            Some(_) => return Err(invalid_payload("provider must be a string")),
        };

        let payload = match object.remove("payload") {
            Some(Value::Object(inner)) => Value::Object(inner),
            Some(Value::Null) | None => value,
            Some(_) => return Err(invalid_payload("payload must be an object")),
        };

        let body: PayloadBody =
            serde_json::from_value(payload).map_err(|e| invalid_payload(&e.to_string()))?;
        let request = body.into_request()?;

        Ok(Self { provider, request })
    }
}

fn invalid_payload(detail: &str) -> ApiError {
    ApiError::BadRequest(format!("Invalid request payload: {}", detail))
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageEnvelope {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Normalized success body.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub id: String,
    pub content: String,
    pub model: String,
    pub usage: UsageEnvelope,
    pub finish_reason: FinishReason,
    pub processing_time: u64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub selected_provider: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub fallback: bool,
}

impl From<ChatResponse> for ResponseEnvelope {
    fn from(response: ChatResponse) -> Self {
        Self {
            id: response.id,
            content: response.content,
            model: response.model,
            usage: UsageEnvelope {
                prompt_tokens: response.usage.prompt_tokens,
                completion_tokens: response.usage.completion_tokens,
                total_tokens: response.usage.total_tokens,
            },
            finish_reason: response.finish_reason,
            processing_time: response.processing_time_ms,
            selected_provider: response.selected_provider,
            fallback: response.fallback,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub display_name: String,
    pub models: Vec<String>,
    pub rate_limit_per_minute: u32,
    pub requires_api_key: bool,
    pub configured: bool,
}

impl Capabilities {
    pub fn new(descriptor: &ProviderDescriptor, configured: bool) -> Self {
        Self {
            display_name: descriptor.display_name.clone(),
            models: descriptor.supported_models.clone(),
            rate_limit_per_minute: descriptor.rate_limit_per_minute,
            requires_api_key: descriptor.requires_api_key,
            configured,
        }
    }
}

/// Body of the health probe.
#[derive(Debug, Serialize)]
pub struct HealthEnvelope {
    pub provider: String,
    pub status: &'static str,
    pub timestamp: String,
    pub capabilities: Capabilities,
}

impl HealthEnvelope {
    pub fn new(provider: impl Into<String>, available: bool, capabilities: Capabilities) -> Self {
        Self {
            provider: provider.into(),
            status: if available { "healthy" } else { "unavailable" },
            timestamp: chrono::Utc::now().to_rfc3339(),
            capabilities,
        }
    }
}

#[cfg(test)]
#[path = "envelope_tests.rs"]
mod tests;
