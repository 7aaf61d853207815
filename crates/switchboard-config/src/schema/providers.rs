//! Provider ids and environment resolution.

use super::Config;

/// Cloud vendors in default priority order.
pub const CLOUD_PROVIDERS: &[&str] = &[
    "openai",
    "anthropic",
    "groq",
    "deepseek",
    "mistral",
    "openrouter",
    "grok",
    "huggingface",
];

/// Local runtimes in default priority order.
pub const LOCAL_PROVIDERS: &[&str] = &["ollama", "vllm"];

pub fn is_known_provider(id: &str) -> bool {
    CLOUD_PROVIDERS.contains(&id) || LOCAL_PROVIDERS.contains(&id)
}

/// Every provider id this build knows, cloud first.
pub fn known_providers() -> impl Iterator<Item = &'static str> {
    CLOUD_PROVIDERS.iter().chain(LOCAL_PROVIDERS.iter()).copied()
}

/// Environment variables consulted for a provider's key, in order.
pub fn api_key_vars(id: &str) -> Vec<String> {
    let mut vars = vec![format!("{}_API_KEY", env_prefix(id))];
    match id {
        "grok" => vars.push("XAI_API_KEY".to_string()),
        "huggingface" => vars.push("HF_TOKEN".to_string()),
        _ => {}
    }
    vars
}

fn env_prefix(id: &str) -> String {
    id.to_ascii_uppercase().replace('-', "_")
}

/// Provider settings after merging the file with the environment.
///
/// Unset fields are left to the adapter's built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProvider {
    pub id: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub default_model: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub rate_limit_per_minute: Option<u32>,
    pub enabled: bool,
}

impl Config {
    /// Resolve a provider against the process environment.
    pub fn resolve_provider(&self, id: &str) -> ResolvedProvider {
        self.resolve_provider_with(id, |name| std::env::var(name).ok())
    }

    /// Resolve a provider with a custom environment lookup.
    ///
    /// File values win; `<ID>_API_KEY`, `<ID>_BASE_URL` and `<ID>_MODEL`
    /// fill whatever the file leaves unset.
    pub fn resolve_provider_with<F>(&self, id: &str, env: F) -> ResolvedProvider
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = self.providers.get(id).cloned().unwrap_or_default();
        let lookup = |name: &str| env(name).filter(|v| !v.trim().is_empty());
        let prefix = env_prefix(id);

        let api_key = non_blank(file.api_key)
            .or_else(|| api_key_vars(id).iter().find_map(|var| lookup(var.as_str())));
        let base_url = non_blank(file.base_url).or_else(|| lookup(&format!("{prefix}_BASE_URL")));
        let default_model =
            non_blank(file.default_model).or_else(|| lookup(&format!("{prefix}_MODEL")));

        ResolvedProvider {
            id: id.to_string(),
            api_key,
            base_url,
            default_model,
            timeout_seconds: file.timeout_seconds,
            rate_limit_per_minute: file.rate_limit_per_minute,
            enabled: file.enabled,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
