//! Fallback orchestrator.

use std::sync::Arc;

use switchboard_protocols::{ChatRequest, ChatResponse, LLMProvider, ProviderError};
use tracing::{debug, info, warn};

use super::fallback::canned_response;
use super::policy::OrchestratorPolicy;
use crate::registry::ProviderRegistry;

/// Tries providers sequentially in priority order, first success wins.
pub struct FallbackOrchestrator {
    registry: Arc<ProviderRegistry>,
    policy: OrchestratorPolicy,
}

impl FallbackOrchestrator {
    pub fn new(registry: Arc<ProviderRegistry>, policy: OrchestratorPolicy) -> Self {
        Self { registry, policy }
    }

    pub fn registry(&self) -> &Arc<ProviderRegistry> {
        &self.registry
    }

    pub fn policy(&self) -> &OrchestratorPolicy {
        &self.policy
    }

    /// Candidate providers for this call, in the order they will be tried.
    ///
    /// Configured cloud providers first, then registered local runtimes.
    pub fn candidates(&self) -> Vec<Arc<dyn LLMProvider>> {
        let cloud = self
            .policy
            .cloud_priority
            .iter()
            .filter_map(|id| self.registry.get(id))
            .filter(|p| p.is_configured());
        let local = self
            .policy
            .local_priority
            .iter()
            .filter_map(|id| self.registry.get(id));
        cloud.chain(local).collect()
    }

    /// Ids of [`candidates`](Self::candidates).
    pub fn candidate_ids(&self) -> Vec<String> {
        self.candidates().iter().map(|p| p.id().to_string()).collect()
    }

    /// Generate with automatic provider selection. Never fails.
    pub async fn generate(&self, request: ChatRequest) -> ChatResponse {
        let candidates = self.candidates();
        if candidates.is_empty() {
            warn!("No provider candidates available, using canned response");
            return canned_response(&request);
        }

        for provider in candidates {
            let attempt = Self::request_for(provider.as_ref(), &request);
            debug!(provider = %provider.id(), model = %attempt.model, "Trying provider");

            match provider.generate(attempt).await {
                Ok(response) => {
                    info!(
                        provider = %provider.id(),
                        model = %response.model,
                        processing_time_ms = response.processing_time_ms,
                        "Provider succeeded"
                    );
                    return response.with_selected_provider(provider.id());
                }
                Err(e) => {
                    warn!(
                        provider = %provider.id(),
                        error_kind = e.kind_name(),
                        error = %e,
                        "Provider failed, trying next candidate"
                    );
                }
            }
        }

        warn!("All providers failed, using canned response");
        canned_response(&request)
    }

    /// Dispatch straight to one provider.
    pub async fn generate_with(
        &self,
        provider_id: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, ProviderError> {
        let provider = self
            .registry
            .get(provider_id)
            .ok_or_else(|| ProviderError::NotFound(provider_id.to_string()))?;

        debug!(provider = %provider_id, model = %request.model, "Direct dispatch");
        let response = provider.generate(request).await?;
        Ok(response.with_selected_provider(provider_id))
    }

    /// Keep the requested model only when the candidate serves it.
    fn request_for(provider: &dyn LLMProvider, request: &ChatRequest) -> ChatRequest {
        let model = if provider.descriptor().supports_model(&request.model) {
            request.model.clone()
        } else {
            provider.default_model().to_string()
        };
        request.clone().with_model(model)
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
