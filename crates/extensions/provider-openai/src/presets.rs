//! Vendors that speak the OpenAI dialect.

use switchboard_protocols::ProviderKind;

/// An OpenAI-compatible vendor and its built-in defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    OpenAI,
    Groq,
    DeepSeek,
    Mistral,
    OpenRouter,
    Grok,
    Vllm,
}

impl Preset {
    pub const ALL: [Preset; 7] = [
        Preset::OpenAI,
        Preset::Groq,
        Preset::DeepSeek,
        Preset::Mistral,
        Preset::OpenRouter,
        Preset::Grok,
        Preset::Vllm,
    ];

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    pub fn id(&self) -> &'static str {
        match self {
            Preset::OpenAI => "openai",
            Preset::Groq => "groq",
            Preset::DeepSeek => "deepseek",
            Preset::Mistral => "mistral",
            Preset::OpenRouter => "openrouter",
            Preset::Grok => "grok",
            Preset::Vllm => "vllm",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Preset::OpenAI => "OpenAI",
            Preset::Groq => "Groq",
            Preset::DeepSeek => "DeepSeek",
            Preset::Mistral => "Mistral AI",
            Preset::OpenRouter => "OpenRouter",
            Preset::Grok => "xAI Grok",
            Preset::Vllm => "vLLM",
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            Preset::OpenAI => "https://api.openai.com/v1",
            Preset::Groq => "https://api.groq.com/openai/v1",
            Preset::DeepSeek => "https://api.deepseek.com/v1",
            Preset::Mistral => "https://api.mistral.ai/v1",
            Preset::OpenRouter => "https://openrouter.ai/api/v1",
            Preset::Grok => "https://api.x.ai/v1",
            Preset::Vllm => "http://localhost:8000/v1",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Preset::OpenAI => "gpt-4o-mini",
            Preset::Groq => "llama-3.1-8b-instant",
            Preset::DeepSeek => "deepseek-chat",
            Preset::Mistral => "mistral-small-latest",
            Preset::OpenRouter => "meta-llama/llama-3.1-8b-instruct",
            Preset::Grok => "grok-beta",
            Preset::Vllm => "meta-llama/Llama-3.1-8B-Instruct",
        }
    }

    pub fn models(&self) -> &'static [&'static str] {
        match self {
            Preset::OpenAI => &["gpt-4o-mini", "gpt-4o", "gpt-4-turbo", "gpt-3.5-turbo"],
            Preset::Groq => &[
                "llama-3.1-8b-instant",
                "llama-3.3-70b-versatile",
                "mixtral-8x7b-32768",
                "gemma2-9b-it",
            ],
            Preset::DeepSeek => &["deepseek-chat", "deepseek-reasoner"],
            Preset::Mistral => &[
                "mistral-small-latest",
                "mistral-medium-latest",
                "mistral-large-latest",
                "open-mistral-nemo",
            ],
            Preset::OpenRouter => &[
                "meta-llama/llama-3.1-8b-instruct",
                "meta-llama/llama-3.1-70b-instruct",
                "mistralai/mistral-7b-instruct",
                "google/gemma-2-9b-it",
            ],
            Preset::Grok => &["grok-beta", "grok-2-latest"],
            Preset::Vllm => &["meta-llama/Llama-3.1-8B-Instruct"],
        }
    }

    pub fn kind(&self) -> ProviderKind {
        match self {
            Preset::Vllm => ProviderKind::Local,
            _ => ProviderKind::Cloud,
        }
    }

    /// Local runtimes accept an optional key.
    pub fn requires_api_key(&self) -> bool {
        self.kind() == ProviderKind::Cloud
    }

    /// Default requests per client per minute. Zero disables limiting.
    pub fn rate_limit_per_minute(&self) -> u32 {
        match self {
            Preset::OpenAI => 60,
            Preset::Groq => 30,
            Preset::DeepSeek => 60,
            Preset::Mistral => 60,
            Preset::OpenRouter => 60,
            Preset::Grok => 60,
            Preset::Vllm => 0,
        }
    }
}
