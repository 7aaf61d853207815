//! LLM Provider trait definition.

use async_trait::async_trait;

use super::{ChatRequest, ChatResponse, ProviderDescriptor, ProviderKind};
use crate::error::ProviderError;

/// Uniform contract over every vendor adapter.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Returns the static provider metadata.
    fn descriptor(&self) -> &ProviderDescriptor;

    /// Returns the provider ID.
    fn id(&self) -> &str {
        &self.descriptor().id
    }

    fn kind(&self) -> ProviderKind;

    /// True when every required credential and URL is present.
    fn is_configured(&self) -> bool;

    /// Model used when the request does not name one.
    fn default_model(&self) -> &str;

    /// Lightweight reachability probe. Never errors; any failure is `false`.
    async fn is_available(&self) -> bool;

    /// Generate a complete (non-streaming) chat completion.
    async fn generate(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatMessage;

    struct EchoProvider {
        descriptor: ProviderDescriptor,
    }

    #[async_trait]
    impl LLMProvider for EchoProvider {
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
            "echo-1"
        }

        async fn is_available(&self) -> bool {
            true
        }

        async fn generate(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
            request.validate()?;
            let content = request.last_user_message().unwrap_or_default().to_string();
            Ok(ChatResponse::new("echo", request.model_or(self.default_model()), content))
        }
    }

    fn echo() -> EchoProvider {
        EchoProvider {
            descriptor: ProviderDescriptor::new("echo", "Echo").with_requires_api_key(false),
        }
    }

    #[test]
    fn test_id_defaults_to_descriptor() {
        assert_eq!(echo().id(), "echo");
    }

    #[tokio::test]
    async fn test_trait_object_generate() {
        let provider: Box<dyn LLMProvider> = Box::new(echo());
        let response = provider
            .generate(ChatRequest::new("", vec![ChatMessage::user("ping")]))
            .await
            .unwrap();
        assert_eq!(response.content, "ping");
        assert_eq!(response.model, "echo-1");
    }

    #[tokio::test]
    async fn test_trait_object_generate_rejects_empty() {
        let provider: Box<dyn LLMProvider> = Box::new(echo());
        let err = provider.generate(ChatRequest::new("", vec![])).await.unwrap_err();
        assert!(matches!(err, ProviderError::InvalidRequest(_)));
    }
}
