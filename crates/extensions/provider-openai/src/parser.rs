//! Response parsing for the OpenAI dialect.

use switchboard_protocols::{ChatResponse, FinishReason, ProviderError, Usage};

use crate::api::ApiResponse;

/// Turn a 2xx body into a [`ChatResponse`].
pub fn parse_response(
    body: &str,
    requested_model: &str,
    prompt_text: &str,
) -> Result<ChatResponse, ProviderError> {
    let response: ApiResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::Protocol(format!("invalid completion body: {e}")))?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::Protocol("response has no choices".to_string()))?;

    let content = choice
        .message
        .and_then(|m| m.content)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ProviderError::Protocol("choice has no message content".to_string()))?;

    let usage = match response.usage {
        Some(u) => Usage::new(u.prompt_tokens, u.completion_tokens),
        None => Usage::estimate(prompt_text, &content),
    };

    let id = response
        .id
        .unwrap_or_else(|| format!("chatcmpl-{}", uuid::Uuid::new_v4()));
    let model = response
        .model
        .unwrap_or_else(|| requested_model.to_string());

    Ok(ChatResponse::new(id, model, content)
        .with_usage(usage)
        .with_finish_reason(FinishReason::from_vendor(choice.finish_reason.as_deref())))
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
