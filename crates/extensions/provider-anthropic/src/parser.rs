//! Response parsing utilities.

use switchboard_protocols::{ChatResponse, FinishReason, ProviderError, Usage};

use crate::api::{ApiResponse, ContentBlock};

/// Parse a 2xx body into a [`ChatResponse`].
pub fn parse_response(body: &str, prompt_text: &str) -> Result<ChatResponse, ProviderError> {
    let response: ApiResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::Protocol(format!("invalid messages body: {e}")))?;

    let text: String = response
        .content
        .iter()
        .filter_map(|block| match block {
            ContentBlock::Text { text } => Some(text.as_str()),
            ContentBlock::Other => None,
        })
        .collect();

    if text.is_empty() {
        return Err(ProviderError::Protocol(
            "response has no text content".to_string(),
        ));
    }

    let usage = match response.usage {
        Some(u) => Usage::new(u.input_tokens, u.output_tokens),
        None => Usage::estimate(prompt_text, &text),
    };

    Ok(ChatResponse::new(response.id, response.model, text)
        .with_usage(usage)
        .with_finish_reason(parse_stop_reason(response.stop_reason.as_deref())))
}

/// Parse stop reason string.
pub fn parse_stop_reason(reason: Option<&str>) -> FinishReason {
    match reason {
        Some("end_turn" | "stop_sequence") => FinishReason::Stop,
        other => FinishReason::from_vendor(other),
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
