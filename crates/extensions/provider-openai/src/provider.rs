//! OpenAI-compatible provider implementation.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::debug;

use switchboard_protocols::{
    ChatRequest, ChatResponse, LLMProvider, ProviderDescriptor, ProviderError, ProviderKind,
    ProviderSettings, DEFAULT_CLOUD_TIMEOUT, DEFAULT_LOCAL_TIMEOUT, PROBE_TIMEOUT,
};

use crate::converter::build_request;
use crate::parser::parse_response;
use crate::presets::Preset;

/// Adapter for any `/chat/completions` vendor.
pub struct OpenAICompatProvider {
    preset: Preset,
    descriptor: ProviderDescriptor,
    api_key: Option<String>,
    base_url: String,
    default_model: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl OpenAICompatProvider {
    pub fn new(preset: Preset, settings: ProviderSettings) -> Self {
        let default_model = settings
            .default_model
            .clone()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| preset.default_model().to_string());

        let mut models: Vec<String> = preset.models().iter().map(|m| m.to_string()).collect();
        if !models.contains(&default_model) {
            models.insert(0, default_model.clone());
        }

        let descriptor = ProviderDescriptor::new(preset.id(), preset.display_name())
            .with_models(models)
            .with_rate_limit(
                settings
                    .rate_limit_per_minute
                    .unwrap_or_else(|| preset.rate_limit_per_minute()),
            )
            .with_requires_api_key(preset.requires_api_key());

        let timeout = settings.timeout.unwrap_or(match preset.kind() {
            ProviderKind::Cloud => DEFAULT_CLOUD_TIMEOUT,
            ProviderKind::Local => DEFAULT_LOCAL_TIMEOUT,
        });

        Self {
            preset,
            descriptor,
            api_key: settings.api_key().map(String::from),
            base_url: settings.base_url_or(preset.base_url()),
            default_model,
            timeout,
            client: reqwest::Client::new(),
        }
    }

    pub fn preset(&self) -> Preset {
        self.preset
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn models_url(&self) -> String {
        format!("{}/models", self.base_url)
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    async fn send_request(&self, request: &ChatRequest, model: &str) -> Result<String, ProviderError> {
        let api_request = build_request(request, model);
        let response = self
            .authorize(self.client.post(self.completions_url()))
            .header("Content-Type", "application/json")
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
impl LLMProvider for OpenAICompatProvider {
    fn descriptor(&self) -> &ProviderDescriptor {
        &self.descriptor
    }

    fn kind(&self) -> ProviderKind {
        self.preset.kind()
    }

    fn is_configured(&self) -> bool {
        !self.preset.requires_api_key() || self.api_key.is_some()
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    async fn is_available(&self) -> bool {
        if !self.is_configured() {
            return false;
        }

        let probe = self.authorize(self.client.get(self.models_url())).send();
        match tokio::time::timeout(PROBE_TIMEOUT, probe).await {
            Ok(Ok(response)) => response.status().is_success(),
            Ok(Err(e)) => {
                debug!(provider = %self.id(), error = %e, "Availability probe failed");
                false
            }
            Err(_) => {
                debug!(provider = %self.id(), "Availability probe timed out");
                false
            }
        }
    }

    async fn generate(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
        request.validate()?;
        if !self.is_configured() {
            return Err(ProviderError::Configuration(format!(
                "{} API key is not configured",
                self.descriptor.display_name
            )));
        }

        let model = request.model_or(&self.default_model).to_string();
        let started = Instant::now();
        debug!(provider = %self.id(), model = %model, "Sending chat completion");

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
