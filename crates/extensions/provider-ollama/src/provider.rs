//! Ollama provider implementation.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::debug;

use switchboard_protocols::{
    ChatRequest, ChatResponse, LLMProvider, ProviderDescriptor, ProviderError, ProviderKind,
    ProviderSettings, DEFAULT_LOCAL_TIMEOUT, PROBE_TIMEOUT,
};

use crate::api::ChatApiRequest;
use crate::parser::parse_response;

const DEFAULT_BASE_URL: &str = "http://localhost:11434";
const DEFAULT_MODEL: &str = "llama3";

const MODELS: &[&str] = &["llama3", "llama3.1", "llama3.2", "mistral", "phi3", "gemma2", "qwen2.5"];

/// Local Ollama runtime.
pub struct OllamaProvider {
    descriptor: ProviderDescriptor,
    base_url: String,
    default_model: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl OllamaProvider {
    pub fn new(settings: ProviderSettings) -> Self {
        let default_model = settings
            .default_model
            .clone()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let mut models: Vec<String> = MODELS.iter().map(|m| m.to_string()).collect();
        if !models.contains(&default_model) {
            models.insert(0, default_model.clone());
        }

        Self {
            descriptor: ProviderDescriptor::new("ollama", "Ollama")
                .with_models(models)
                .with_rate_limit(settings.rate_limit_per_minute.unwrap_or(0))
                .with_requires_api_key(false),
            base_url: settings.base_url_or(DEFAULT_BASE_URL),
            default_model,
            timeout: settings.timeout.unwrap_or(DEFAULT_LOCAL_TIMEOUT),
            client: reqwest::Client::new(),
        }
    }

    async fn send_request(&self, request: &ChatRequest, model: &str) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&ChatApiRequest::from_request(request, model))
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ProviderError::from_api_response(status.as_u16(), body));
        }
        Ok(body)
    }
}

#[async_trait]
impl LLMProvider for OllamaProvider {
    fn descriptor(&self) -> &ProviderDescriptor {
        &self.descriptor
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Local
    }

    fn is_configured(&self) -> bool {
        true
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    async fn is_available(&self) -> bool {
        let probe = self.client.get(format!("{}/api/tags", self.base_url)).send();
        match tokio::time::timeout(PROBE_TIMEOUT, probe).await {
            Ok(Ok(response)) => response.status().is_success(),
            Ok(Err(e)) => {
                debug!(provider = "ollama", error = %e, "Availability probe failed");
                false
            }
            Err(_) => false,
        }
    }

    async fn generate(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
        request.validate()?;

        let model = request.model_or(&self.default_model).to_string();
        let started = Instant::now();
        debug!(provider = "ollama", model = %model, "Sending chat request");

        let body = tokio::time::timeout(self.timeout, self.send_request(&request, &model))
            .await
            .map_err(|_| ProviderError::timeout(self.timeout))??;

        let response = parse_response(&body, &model, &request.prompt_text())?;
        Ok(response.with_processing_time(started.elapsed().as_millis() as u64))
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
