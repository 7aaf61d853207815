use super::*;
use crate::testing::ScriptedProvider;
use switchboard_protocols::ProviderKind;

fn provider(id: &str) -> Arc<dyn LLMProvider> {
    Arc::new(ScriptedProvider::replying(id, ProviderKind::Cloud, "ok"))
}

#[test]
fn test_registry_creation() {
    let registry = ProviderRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.list_ids().is_empty());
}

#[test]
fn test_registry_default() {
    let registry = ProviderRegistry::default();
    assert_eq!(registry.len(), 0);
}

#[test]
fn test_register_provider() {
    let registry = ProviderRegistry::new();
    assert!(registry.register(provider("openai")).is_ok());
    assert_eq!(registry.len(), 1);
    assert!(registry.contains("openai"));
}

#[test]
fn test_register_duplicate() {
    let registry = ProviderRegistry::new();
    registry.register(provider("groq")).unwrap();
    let result = registry.register(provider("groq"));
    assert_eq!(result, Err(RegistryError::AlreadyRegistered("groq".to_string())));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_unregister_provider() {
    let registry = ProviderRegistry::new();
    registry.register(provider("mistral")).unwrap();
    assert!(registry.unregister("mistral").is_ok());
    assert!(registry.is_empty());
}

#[test]
fn test_unregister_nonexistent() {
    let registry = ProviderRegistry::new();
    assert_eq!(
        registry.unregister("nonexistent"),
        Err(RegistryError::NotFound("nonexistent".to_string()))
    );
}

#[test]
fn test_get_provider() {
    let registry = ProviderRegistry::new();
    registry.register(provider("deepseek")).unwrap();
    let found = registry.get("deepseek").unwrap();
    assert_eq!(found.id(), "deepseek");
    assert!(registry.get("missing").is_none());
}

#[test]
fn test_list_ids_sorted() {
    let registry = ProviderRegistry::new();
    for id in ["vllm", "anthropic", "ollama", "groq"] {
        registry.register(provider(id)).unwrap();
    }
    assert_eq!(registry.list_ids(), vec!["anthropic", "groq", "ollama", "vllm"]);
}

#[test]
fn test_descriptors_sorted_by_id() {
    let registry = ProviderRegistry::new();
    registry.register(provider("openrouter")).unwrap();
    registry.register(provider("grok")).unwrap();
    let ids: Vec<_> = registry.descriptors().into_iter().map(|d| d.id).collect();
    assert_eq!(ids, vec!["grok", "openrouter"]);
}
