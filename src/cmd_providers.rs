//! `providers` and `probe` subcommand handlers.

use std::sync::Arc;

use futures::future::join_all;

use switchboard_config::Config;
use switchboard_protocols::LLMProvider;

use crate::server::build_orchestrator;

/// Print the registry as a table.
pub(crate) async fn providers_list(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let orchestrator = build_orchestrator(config);
    let registry = orchestrator.registry();

    println!(
        "{:<12} {:<8} {:<11} {:<11} {}",
        "ID", "KIND", "CONFIGURED", "LIMIT/MIN", "DEFAULT MODEL"
    );
    println!("{}", "-".repeat(72));
    for id in registry.list_ids() {
        let Some(provider) = registry.get(&id) else {
            continue;
        };
        let limit = match provider.descriptor().rate_limit_per_minute {
            0 => "-".to_string(),
            n => n.to_string(),
        };
        println!(
            "{:<12} {:<8} {:<11} {:<11} {}",
            id,
            provider.kind().as_str(),
            if provider.is_configured() { "yes" } else { "no" },
            limit,
            provider.default_model()
        );
    }

    println!();
    println!("Fallback order: {}", orchestrator.candidate_ids().join(" -> "));
    Ok(())
}

/// Probe one provider, or all of them concurrently.
pub(crate) async fn probe(
    config: &Config,
    provider_id: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let orchestrator = build_orchestrator(config);
    let registry = orchestrator.registry();

    let targets: Vec<Arc<dyn LLMProvider>> = match provider_id {
        Some(id) => {
            let provider = registry
                .get(id)
                .ok_or_else(|| format!("Unknown provider: {}", id))?;
            vec![provider]
        }
        None => registry.list_ids().iter().filter_map(|id| registry.get(id)).collect(),
    };

    let results = join_all(targets.iter().map(|p| async move {
        (p.id().to_string(), p.is_available().await)
    }))
    .await;

    for (id, available) in results {
        println!("{:<12} {}", id, if available { "healthy" } else { "unavailable" });
    }
    Ok(())
}
