//! HuggingFace provider implementation.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::debug;

use switchboard_protocols::{
    ChatRequest, ChatResponse, FinishReason, LLMProvider, ProviderDescriptor, ProviderError,
    ProviderKind, ProviderSettings, Usage, DEFAULT_CLOUD_TIMEOUT, PROBE_TIMEOUT,
};

use crate::api::InferenceResponse;
use crate::converter::build_request;

const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
const DEFAULT_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.3";
const DEFAULT_RATE_LIMIT: u32 = 30;

const MODELS: &[&str] = &[
    "mistralai/Mistral-7B-Instruct-v0.3",
    "meta-llama/Meta-Llama-3-8B-Instruct",
    "HuggingFaceH4/zephyr-7b-beta",
    "google/gemma-2-2b-it",
];

/// HuggingFace Inference API provider.
pub struct HuggingFaceProvider {
    descriptor: ProviderDescriptor,
    api_key: Option<String>,
    base_url: String,
    default_model: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HuggingFaceProvider {
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
            descriptor: ProviderDescriptor::new("huggingface", "HuggingFace")
                .with_models(models)
                .with_rate_limit(settings.rate_limit_per_minute.unwrap_or(DEFAULT_RATE_LIMIT)),
            api_key: settings.api_key().map(String::from),
            base_url: settings.base_url_or(DEFAULT_BASE_URL),
            default_model,
            timeout: settings.timeout.unwrap_or(DEFAULT_CLOUD_TIMEOUT),
            client: reqwest::Client::new(),
        }
    }

    /// Inference URL for `model`, one escaped path segment per id part.
    fn model_url(&self, model: &str) -> Result<reqwest::Url, ProviderError> {
        if !is_valid_model_id(model) {
            return Err(ProviderError::InvalidRequest(format!(
                "invalid HuggingFace model id: {model}"
            )));
        }

        let mut url = reqwest::Url::parse(&self.base_url).map_err(|e| {
            ProviderError::Configuration(format!("invalid base URL {}: {e}", self.base_url))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                ProviderError::Configuration(format!("base URL cannot take a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .push("models")
            .extend(model.split('/'));
        Ok(url)
    }

    async fn send_request(
        &self,
        api_key: &str,
        request: &ChatRequest,
        model: &str,
    ) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(self.model_url(model)?)
            .bearer_auth(api_key)
            .json(&build_request(request))
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

/// Model ids are `name` or `org/name` built from `[A-Za-z0-9._-]`.
fn is_valid_model_id(model: &str) -> bool {
    let segments: Vec<&str> = model.split('/').collect();
    segments.len() <= 2
        && segments.iter().all(|segment| {
            !segment.is_empty()
                && *segment != "."
                && *segment != ".."
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        })
}

fn parse_response(body: &str, model: &str, prompt_text: &str) -> Result<ChatResponse, ProviderError> {
    let parsed: InferenceResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::Protocol(format!("invalid inference body: {e}")))?;

    let content = parsed
        .into_text()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ProviderError::Protocol("response has no generated_text".to_string()))?;

    let usage = Usage::estimate(prompt_text, &content);
    Ok(
        ChatResponse::new(format!("hf-{}", uuid::Uuid::new_v4()), model, content)
            .with_usage(usage)
            .with_finish_reason(FinishReason::Stop),
    )
}

#[async_trait]
impl LLMProvider for HuggingFaceProvider {
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

        let url = match self.model_url(&self.default_model) {
            Ok(url) => url,
            Err(e) => {
                debug!(provider = "huggingface", error = %e, "Availability probe skipped");
                return false;
            }
        };

        let probe = self.client.get(url)
            .bearer_auth(api_key)
            .send();
        match tokio::time::timeout(PROBE_TIMEOUT, probe).await {
            Ok(Ok(response)) => response.status().is_success(),
            Ok(Err(e)) => {
                debug!(provider = "huggingface", error = %e, "Availability probe failed");
                false
            }
            Err(_) => false,
        }
    }

    async fn generate(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
        request.validate()?;
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            ProviderError::Configuration("HUGGINGFACE_API_KEY is not set".to_string())
        })?;

        let model = request.model_or(&self.default_model).to_string();
        let started = Instant::now();
        debug!(provider = "huggingface", model = %model, "Sending inference request");

        let body = tokio::time::timeout(self.timeout, self.send_request(api_key, &request, &model))
            .await
            .map_err(|_| ProviderError::timeout(self.timeout))??;

        let response = parse_response(&body, &model, &request.prompt_text())?;
        Ok(response.with_processing_time(started.elapsed().as_millis() as u64))
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
