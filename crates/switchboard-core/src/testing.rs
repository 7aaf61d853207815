//! Scripted providers for tests.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use switchboard_protocols::{
    ChatRequest, ChatResponse, LLMProvider, ProviderDescriptor, ProviderError, ProviderKind, Usage,
};

/// What a [`ScriptedProvider`] does when `generate` is called.
#[derive(Debug, Clone)]
pub enum Script {
    Reply(String),
    Upstream(u16),
    Timeout,
    /// Sleeps for the duration, then replies.
    Slow(Duration, String),
    Panic,
}

/// Shared, ordered record of `generate` calls as `(provider, model)`.
pub type CallLog = Arc<Mutex<Vec<(String, String)>>>;

/// In-memory provider that follows a fixed script.
pub struct ScriptedProvider {
    descriptor: ProviderDescriptor,
    kind: ProviderKind,
    configured: bool,
    available: bool,
    default_model: String,
    script: Script,
    calls: CallLog,
}

impl ScriptedProvider {
    pub fn new(id: &str, kind: ProviderKind, script: Script) -> Self {
        Self {
            descriptor: ProviderDescriptor::new(id, id)
                .with_models([format!("{id}-default")])
                .with_requires_api_key(kind == ProviderKind::Cloud),
            kind,
            configured: true,
            available: true,
            default_model: format!("{id}-default"),
            script,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn replying(id: &str, kind: ProviderKind, content: &str) -> Self {
        Self::new(id, kind, Script::Reply(content.to_string()))
    }

    pub fn failing(id: &str, kind: ProviderKind) -> Self {
        Self::new(id, kind, Script::Upstream(503))
    }

    pub fn with_configured(mut self, configured: bool) -> Self {
        self.configured = configured;
        self
    }

    pub fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    pub fn with_rate_limit(mut self, per_minute: u32) -> Self {
        self.descriptor.rate_limit_per_minute = per_minute;
        self
    }

    pub fn with_models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.descriptor.supported_models = models.into_iter().map(Into::into).collect();
        self
    }

    /// Record calls into a log shared with other providers.
    pub fn with_call_log(mut self, calls: CallLog) -> Self {
        self.calls = calls;
        self
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl LLMProvider for ScriptedProvider {
    fn descriptor(&self) -> &ProviderDescriptor {
        &self.descriptor
    }

    fn kind(&self) -> ProviderKind {
        self.kind
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    async fn is_available(&self) -> bool {
        self.available
    }

    async fn generate(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
        request.validate()?;
        let model = request.model_or(&self.default_model).to_string();
        self.calls
            .lock()
            .push((self.descriptor.id.clone(), model.clone()));

        let content = match &self.script {
            Script::Reply(content) => content.clone(),
            Script::Upstream(status) => {
                return Err(ProviderError::Upstream {
                    status: *status,
                    message: "scripted failure".to_string(),
                });
            }
            Script::Timeout => return Err(ProviderError::Timeout(30)),
            Script::Slow(delay, content) => {
                tokio::time::sleep(*delay).await;
                content.clone()
            }
            Script::Panic => panic!("scripted panic in {}", self.descriptor.id),
        };

        let usage = Usage::estimate(&request.prompt_text(), &content);
        Ok(ChatResponse::new(format!("{}-1", self.descriptor.id), model, content).with_usage(usage))
    }
}
