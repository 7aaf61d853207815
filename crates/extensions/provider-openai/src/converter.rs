//! Request conversion for the OpenAI dialect.

use switchboard_protocols::ChatRequest;

use crate::api::{ApiMessage, ApiRequest};

/// Build the wire request. The system prompt travels inline, first.
pub fn build_request(request: &ChatRequest, model: &str) -> ApiRequest {
    ApiRequest {
        model: model.to_string(),
        messages: request
            .ordered_messages()
            .into_iter()
            .map(|m| ApiMessage {
                role: m.role.as_str().to_string(),
                content: m.content,
            })
            .collect(),
        temperature: request.temperature,
        max_tokens: request.max_tokens,
        top_p: request.top_p,
        stream: false,
    }
}
