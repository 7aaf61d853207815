//! Common utility types.

use serde::{Deserialize, Serialize};

/// Approximate characters per token used when a vendor omits usage.
const CHARS_PER_TOKEN: usize = 4;

/// Reason a completion finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    #[default]
    Stop,
    Length,
    ContentFilter,
    ToolCalls,
}

impl FinishReason {
    /// Map a vendor-specific finish/stop reason onto the uniform set.
    ///
    /// Unknown or absent reasons map to [`FinishReason::Stop`].
    pub fn from_vendor(reason: Option<&str>) -> Self {
        match reason {
            Some("length" | "max_tokens" | "model_length") => FinishReason::Length,
            Some("content_filter" | "safety" | "refusal") => FinishReason::ContentFilter,
            Some("tool_calls" | "tool_use" | "function_call") => FinishReason::ToolCalls,
            _ => FinishReason::Stop,
        }
    }
}

/// Token usage for a completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl Usage {
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens.saturating_add(completion_tokens),
        }
    }

    /// Best-effort usage when the vendor does not report it.
    pub fn estimate(prompt: &str, completion: &str) -> Self {
        Self::new(estimate_tokens(prompt), estimate_tokens(completion))
    }
}

/// Rough token count (4 chars per token, rounded up).
pub fn estimate_tokens(text: &str) -> u32 {
    let chars = text.chars().count();
    u32::try_from(chars.div_ceil(CHARS_PER_TOKEN)).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[path = "common_tests.rs"]
mod tests;
