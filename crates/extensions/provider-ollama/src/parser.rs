//! Response parsing for Ollama.

use switchboard_protocols::{ChatResponse, FinishReason, ProviderError, Usage};

use crate::api::ChatApiResponse;

pub fn parse_response(
    body: &str,
    requested_model: &str,
    prompt_text: &str,
) -> Result<ChatResponse, ProviderError> {
    let response: ChatApiResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::Protocol(format!("invalid chat body: {e}")))?;

    let content = response
        .message
        .and_then(|m| m.content)
        .filter(|c| !c.is_empty())
        .or(response.response)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ProviderError::Protocol("response has no message content".to_string()))?;

    let usage = match (response.prompt_eval_count, response.eval_count) {
        (None, None) => Usage::estimate(prompt_text, &content),
        (prompt, completion) => Usage::new(prompt.unwrap_or(0), completion.unwrap_or(0)),
    };

    Ok(ChatResponse::new(
        format!("ollama-{}", uuid::Uuid::new_v4()),
        response.model.unwrap_or_else(|| requested_model.to_string()),
        content,
    )
    .with_usage(usage)
    .with_finish_reason(FinishReason::from_vendor(response.done_reason.as_deref())))
}
