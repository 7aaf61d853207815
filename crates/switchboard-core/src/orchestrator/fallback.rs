//! Canned responses used when no provider answers.

use switchboard_protocols::{ChatRequest, ChatResponse, FinishReason, Usage};

/// Model name reported on canned responses.
pub const FALLBACK_MODEL: &str = "fallback";

/// Latency reported on canned responses.
pub const FALLBACK_PROCESSING_TIME_MS: u64 = 100;

const INVESTMENT_TEXT: &str = "Thank you for your interest in investment opportunities. \
Our team evaluates ventures on market potential, team strength and scalability. \
Please share a short overview of your opportunity and a partner will follow up with next steps.";

const MARKET_RESEARCH_TEXT: &str = "Market research is central to how we validate new ventures. \
We combine competitive analysis, customer interviews and sizing models to test demand before building. \
Tell us which market you are exploring and we will point you to the most relevant insights.";

const STARTUP_TEXT: &str = "We partner with founders from idea to launch. \
Our venture studio provides product, engineering and go-to-market support alongside capital. \
Describe your startup idea and the stage you are at, and we will suggest how to move forward.";

const GENERIC_TEXT: &str = "Thanks for reaching out. Our AI systems are being configured \
right now, so this is an automated reply. Please try again shortly or contact our team directly \
and we will be glad to help.";

/// Deterministic text for the most recent user message.
fn canned_text(last_user_message: &str) -> &'static str {
    let message = last_user_message.to_lowercase();
    if message.contains("investment") {
        INVESTMENT_TEXT
    } else if message.contains("market") || message.contains("research") {
        MARKET_RESEARCH_TEXT
    } else if message.contains("startup") || message.contains("venture") {
        STARTUP_TEXT
    } else {
        GENERIC_TEXT
    }
}

/// Build the locally synthesized response for a request.
///
/// Never fails. The result is always tagged `fallback`.
pub fn canned_response(request: &ChatRequest) -> ChatResponse {
    let content = canned_text(request.last_user_message().unwrap_or_default());
    let usage = Usage::estimate(&request.prompt_text(), content);

    ChatResponse::new(format!("fallback-{}", uuid::Uuid::new_v4()), FALLBACK_MODEL, content)
        .with_usage(usage)
        .with_finish_reason(FinishReason::Stop)
        .with_processing_time(FALLBACK_PROCESSING_TIME_MS)
        .as_fallback()
}
