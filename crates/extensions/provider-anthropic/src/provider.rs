//! Anthropic provider implementation.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::debug;

use switchboard_protocols::{
    ChatRequest, ChatResponse, LLMProvider, ProviderDescriptor, ProviderError, ProviderKind,
    ProviderSettings, DEFAULT_CLOUD_TIMEOUT, PROBE_TIMEOUT,
};

use crate::converter::build_request;
use crate::parser::parse_response;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_MODEL: &str = "claude-3-5-haiku-latest";
const API_VERSION: &str = "2023-06-01";
const DEFAULT_RATE_LIMIT: u32 = 50;

const MODELS: &[&str] = &[
    "claude-3-5-haiku-latest",
    "claude-3-5-sonnet-latest",
    "claude-3-opus-latest",
    "claude-3-haiku-20240307",
];

/// Anthropic LLM provider.
pub struct AnthropicProvider {
    descriptor: ProviderDescriptor,
    api_key: Option<String>,
    base_url: String,
    default_model: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl AnthropicProvider {
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
            descriptor: ProviderDescriptor::new("anthropic", "Anthropic Claude")
                .with_models(models)
                .with_rate_limit(settings.rate_limit_per_minute.unwrap_or(DEFAULT_RATE_LIMIT)),
            api_key: settings.api_key().map(String::from),
            base_url: settings.base_url_or(DEFAULT_BASE_URL),
            default_model,
            timeout: settings.timeout.unwrap_or(DEFAULT_CLOUD_TIMEOUT),
            client: reqwest::Client::new(),
        }
    }

    fn with_headers(&self, builder: reqwest::RequestBuilder, api_key: &str) -> reqwest::RequestBuilder {
        builder
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION)
    }

    async fn send_request(
        &self,
        api_key: &str,
        request: &ChatRequest,
        model: &str,
    ) -> Result<String, ProviderError> {
        let api_request = build_request(request, model);
        let response = self
            .with_headers(self.client.post(format!("{}/v1/messages", self.base_url)), api_key)
            .header("content-type", "application/json")
            .json(&api_request)
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
impl LLMProvider for AnthropicProvider {
    fn descriptor(&self) -> &ProviderDescriptor {
        &self.descriptor
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Cloud
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    async fn is_available(&self) -> bool {
        let Some(api_key) = self.api_key.as_deref() else {
            return false;
        };

        let probe = self
            .with_headers(self.client.get(format!("{}/v1/models", self.base_url)), api_key)
            .send();
        match tokio::time::timeout(PROBE_TIMEOUT, probe).await {
            Ok(Ok(response)) => response.status().is_success(),
            Ok(Err(e)) => {
                debug!(provider = "anthropic", error = %e, "Availability probe failed");
                false
            }
            Err(_) => false,
        }
    }

    async fn generate(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
        request.validate()?;
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            ProviderError::Configuration("ANTHROPIC_API_KEY is not set".to_string())
        })?;

        let model = request.model_or(&self.default_model).to_string();
        let started = Instant::now();
        debug!(provider = "anthropic", model = %model, "Sending messages request");

        let body = tokio::time::timeout(self.timeout, self.send_request(api_key, &request, &model))
            .await
            .map_err(|_| ProviderError::timeout(self.timeout))??;

        let response = parse_response(&body, &request.prompt_text())?;
        Ok(response.with_processing_time(started.elapsed().as_millis() as u64))
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
