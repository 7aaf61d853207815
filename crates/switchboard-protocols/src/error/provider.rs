//! LLM provider errors.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// A required credential or URL is missing. Raised before any network call.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    /// The vendor answered with a non-2xx status.
    #[error("Upstream error: {status} - {message}")]
    Upstream { status: u16, message: String },

    /// A 2xx body that does not have the expected shape.
    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Provider not found: {0}")]
    NotFound(String),
}

impl ProviderError {
    /// Build an upstream error from a status and raw body.
    ///
    /// Extracts `error.message` (or a string `error`) when the body is JSON.
    pub fn from_api_response(status: u16, body: String) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v["error"]["message"]
                    .as_str()
                    .or_else(|| v["error"].as_str())
                    .map(String::from)
            })
            .unwrap_or(body);
        ProviderError::Upstream { status, message }
    }

    /// Timeout for an elapsed budget, rounded up to whole seconds.
    pub fn timeout(budget: Duration) -> Self {
        let secs = budget.as_secs() + u64::from(budget.subsec_nanos() > 0);
        ProviderError::Timeout(secs)
    }

    /// Stable label for logs and metrics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ProviderError::Configuration(_) => "configuration",
            ProviderError::Timeout(_) => "timeout",
            ProviderError::Upstream { .. } => "upstream",
            ProviderError::Protocol(_) => "protocol",
            ProviderError::Network(_) => "network",
            ProviderError::InvalidRequest(_) => "invalid_request",
            ProviderError::NotFound(_) => "not_found",
        }
    }

    pub fn is_configuration_error(&self) -> bool {
        matches!(self, ProviderError::Configuration(_))
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
