//! Provider construction and registration.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use switchboard_config::{known_providers, Config, ResolvedProvider};
use switchboard_core::ProviderRegistry;
use switchboard_protocols::{LLMProvider, ProviderSettings};
use switchboard_provider_anthropic::AnthropicProvider;
use switchboard_provider_huggingface::HuggingFaceProvider;
use switchboard_provider_ollama::OllamaProvider;
use switchboard_provider_openai::{OpenAICompatProvider, Preset};

/// Map resolved configuration onto adapter settings.
fn settings_for(resolved: &ResolvedProvider) -> ProviderSettings {
    ProviderSettings {
        api_key: resolved.api_key.clone(),
        base_url: resolved.base_url.clone(),
        default_model: resolved.default_model.clone(),
        timeout: resolved.timeout_seconds.map(Duration::from_secs),
        rate_limit_per_minute: resolved.rate_limit_per_minute,
    }
}

fn build_provider(id: &str, settings: ProviderSettings) -> Option<Arc<dyn LLMProvider>> {
    match id {
        "anthropic" => Some(Arc::new(AnthropicProvider::new(settings))),
        "huggingface" => Some(Arc::new(HuggingFaceProvider::new(settings))),
        "ollama" => Some(Arc::new(OllamaProvider::new(settings))),
        other => Preset::from_id(other)
            .map(|preset| Arc::new(OpenAICompatProvider::new(preset, settings)) as Arc<dyn LLMProvider>),
    }
}

/// Build every enabled adapter, resolving settings through `env`.
pub(crate) fn build_providers_with<F>(config: &Config, env: F) -> Vec<Arc<dyn LLMProvider>>
where
    F: Fn(&str) -> Option<String>,
{
    known_providers()
        .filter_map(|id| {
            let resolved = config.resolve_provider_with(id, &env);
            if !resolved.enabled {
                info!(provider = %id, "Provider disabled in configuration");
                return None;
            }
            build_provider(id, settings_for(&resolved))
        })
        .collect()
}

/// Register adapters using process environment variables.
pub(crate) fn register_providers(registry: &ProviderRegistry, config: &Config) {
    let providers = build_providers_with(config, |var| std::env::var(var).ok());

    for provider in providers {
        let id = provider.id().to_string();
        if let Err(e) = registry.register(provider) {
            warn!("Failed to register {} provider: {}", id, e);
        }
    }

    let configured: Vec<_> = registry
        .list_ids()
        .into_iter()
        .filter(|id| registry.get(id).is_some_and(|p| p.is_configured()))
        .collect();
    if configured.is_empty() {
        warn!("No cloud provider credentials found. Only local runtimes and canned responses are available.");
    } else {
        info!("Configured providers: {:?}", configured);
    }
}
