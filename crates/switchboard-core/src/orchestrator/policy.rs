//! Static candidate ordering.

use serde::{Deserialize, Serialize};

/// Priority lists consulted on every orchestrated call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrchestratorPolicy {
    /// Cloud providers, tried first and only when configured.
    pub cloud_priority: Vec<String>,
    /// Local runtimes, tried after every cloud candidate.
    pub local_priority: Vec<String>,
}

impl OrchestratorPolicy {
    pub fn new<C, L>(cloud_priority: C, local_priority: L) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        Self {
            cloud_priority: cloud_priority.into_iter().map(Into::into).collect(),
            local_priority: local_priority.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for OrchestratorPolicy {
    fn default() -> Self {
        Self::new(
            [
                "openai",
                "anthropic",
                "groq",
                "deepseek",
                "mistral",
                "openrouter",
                "grok",
                "huggingface",
            ],
            ["ollama", "vllm"],
        )
    }
}
