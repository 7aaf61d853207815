//! Message conversion for the Anthropic API.

use switchboard_protocols::ChatRequest;

use crate::api::{ApiMessage, ApiRequest};

/// Build the wire request. The system prompt moves to its own field.
pub fn build_request(request: &ChatRequest, model: &str) -> ApiRequest {
    ApiRequest {
        model: model.to_string(),
        messages: request
            .conversation()
            .map(|m| ApiMessage {
                role: m.role.as_str().to_string(),
                content: m.content.clone(),
            })
            .collect(),
        system: request.system_prompt().map(String::from),
        max_tokens: request.max_tokens,
        temperature: request.temperature,
        top_p: request.top_p,
    }
}
