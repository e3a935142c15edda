//! Request adapter between the public API and Ollama.
//!
//! Each operation translates an inbound request into one Ollama call and
//! normalizes the reply. There is no request-time retry: a failed call is
//! reported to the caller immediately.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info};

use crate::domain::{
    CHAT_PRESET, ChatMessage, ChatOutcome, ChatRequest, Completion, GENERATE_PRESET,
    GenerateOutcome, GenerateRequest, HealthReport, ModelList,
};
use crate::ports::{BackendError, ChatCall, GenerateCall, OllamaPort};

/// Errors surfaced by request-time operations.
///
/// The display text is the `detail` string returned to API callers.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Failed to get models: {0}")]
    ListModels(#[source] BackendError),

    #[error("Chat failed: {0}")]
    Chat(#[source] BackendError),

    #[error("Generate failed: {0}")]
    Generate(#[source] BackendError),
}

impl BridgeError {
    /// The underlying backend failure.
    pub const fn backend(&self) -> &BackendError {
        match self {
            Self::ListModels(e) | Self::Chat(e) | Self::Generate(e) => e,
        }
    }
}

/// Stateless request adapter over an [`OllamaPort`].
///
/// Cheap to clone; every clone shares the same backend handle.
#[derive(Clone)]
pub struct BridgeService {
    ollama: Arc<dyn OllamaPort>,
}

impl BridgeService {
    pub fn new(ollama: Arc<dyn OllamaPort>) -> Self {
        Self { ollama }
    }

    /// Probe Ollama and report connectivity. Never fails.
    pub async fn check_health(&self) -> HealthReport {
        match self.ollama.list_models().await {
            Ok(reply) => HealthReport::healthy(ModelList::from_reply(&reply).models),
            Err(e) => {
                error!("Health probe failed: {e}");
                HealthReport::unhealthy(e.to_string())
            }
        }
    }

    /// List installed model names in backend order.
    pub async fn list_models(&self) -> Result<ModelList, BridgeError> {
        let reply = self.ollama.list_models().await.map_err(|e| {
            error!("Failed to list models: {e}");
            BridgeError::ListModels(e)
        })?;

        let list = ModelList::from_reply(&reply);
        debug!(count = list.models.len(), "Listed models");
        Ok(list)
    }

    /// Run a single-turn chat with [`CHAT_PRESET`].
    ///
    /// Streaming requests get the placeholder body and never reach Ollama.
    pub async fn chat(
        &self,
        request: ChatRequest,
    ) -> Result<Completion<ChatOutcome>, BridgeError> {
        info!(model = %request.model, streaming = %request.stream, "Processing chat request");

        if request.stream {
            return Ok(Completion::streaming_unsupported());
        }

        let call = ChatCall {
            model: request.model,
            messages: vec![ChatMessage::user(request.message)],
            stream: false,
            options: CHAT_PRESET,
        };

        let reply = self.ollama.chat(&call).await.map_err(|e| {
            error!(model = %call.model, "Chat failed: {e}");
            BridgeError::Chat(e)
        })?;

        Ok(Completion::Complete(ChatOutcome::from_reply(call.model, &reply)))
    }

    /// Run a single-shot completion with [`GENERATE_PRESET`].
    ///
    /// Streaming requests get the placeholder body and never reach Ollama.
    pub async fn generate(
        &self,
        request: GenerateRequest,
    ) -> Result<Completion<GenerateOutcome>, BridgeError> {
        info!(model = %request.model, streaming = %request.stream, "Processing generate request");

        if request.stream {
            return Ok(Completion::streaming_unsupported());
        }

        let call = GenerateCall {
            model: request.model,
            prompt: request.prompt,
            stream: false,
            options: GENERATE_PRESET,
        };

        let reply = self.ollama.generate(&call).await.map_err(|e| {
            error!(model = %call.model, "Generate failed: {e}");
            BridgeError::Generate(e)
        })?;

        Ok(Completion::Complete(GenerateOutcome::from_reply(call.model, &reply)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::STREAMING_NOT_IMPLEMENTED;
    use crate::ports::MockOllamaPort;
    use serde_json::json;

    fn service(mock: MockOllamaPort) -> BridgeService {
        BridgeService::new(Arc::new(mock))
    }

    fn refused() -> BackendError {
        BackendError::Unreachable("connection refused".to_string())
    }

    #[tokio::test]
    async fn test_health_reports_model_names() {
        let mut mock = MockOllamaPort::new();
        mock.expect_list_models()
            .times(1)
            .returning(|| Ok(json!({"models": [{"model": "gemma3:4b"}, {"name": "phi3"}]})));

        let report = service(mock).check_health().await;
        assert_eq!(
            report,
            HealthReport::healthy(vec!["gemma3:4b".to_string(), "phi3".to_string()])
        );
    }

    #[tokio::test]
    async fn test_health_absorbs_backend_failure() {
        let mut mock = MockOllamaPort::new();
        mock.expect_list_models().returning(|| Err(refused()));

        let report = service(mock).check_health().await;
        assert_eq!(
            report,
            HealthReport::unhealthy("Failed to connect to Ollama: connection refused")
        );
    }

    #[tokio::test]
    async fn test_list_models_error_detail() {
        let mut mock = MockOllamaPort::new();
        mock.expect_list_models().returning(|| Err(refused()));

        let err = service(mock).list_models().await.unwrap_err();
        assert!(err.to_string().starts_with("Failed to get models:"));
        assert!(err.backend().is_unreachable());
    }

    #[tokio::test]
    async fn test_chat_sends_single_user_turn_with_preset() {
        let mut mock = MockOllamaPort::new();
        mock.expect_chat()
            .withf(|call| {
                call.model == "gemma3:4b"
                    && call.messages == vec![ChatMessage::user("hello")]
                    && !call.stream
                    && call.options == CHAT_PRESET
            })
            .times(1)
            .returning(|_| Ok(json!({"message": {"role": "assistant", "content": "Hi!"}})));

        let request: ChatRequest = serde_json::from_value(json!({"message": "hello"})).unwrap();
        let completion = service(mock).chat(request).await.unwrap();

        assert_eq!(
            completion,
            Completion::Complete(ChatOutcome {
                model: "gemma3:4b".to_string(),
                message: "Hi!".to_string(),
                done: true,
            })
        );
    }

    #[tokio::test]
    async fn test_chat_streaming_never_contacts_backend() {
        let mut mock = MockOllamaPort::new();
        mock.expect_chat().never();

        let request = ChatRequest {
            model: "llama3".to_string(),
            message: "hello".to_string(),
            stream: true,
        };
        let completion = service(mock).chat(request).await.unwrap();

        let Completion::StreamingUnsupported(placeholder) = completion else {
            panic!("expected streaming placeholder");
        };
        assert_eq!(placeholder.message, STREAMING_NOT_IMPLEMENTED);
    }

    #[tokio::test]
    async fn test_chat_failure_prefix() {
        let mut mock = MockOllamaPort::new();
        mock.expect_chat().returning(|_| {
            Err(BackendError::Status {
                status: 404,
                message: "model 'nope' not found".to_string(),
            })
        });

        let request = ChatRequest {
            model: "nope".to_string(),
            message: "hello".to_string(),
            stream: false,
        };
        let err = service(mock).chat(request).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Chat failed: model 'nope' not found (status code: 404)"
        );
    }

    #[tokio::test]
    async fn test_generate_uses_deterministic_preset() {
        let mut mock = MockOllamaPort::new();
        mock.expect_generate()
            .withf(|call| {
                call.prompt == "2+2?" && call.options == GENERATE_PRESET && !call.stream
            })
            .times(1)
            .returning(|_| Ok(json!({"response": "4", "done": true, "eval_count": 2})));

        let request = GenerateRequest {
            model: "gemma3:4b".to_string(),
            prompt: "2+2?".to_string(),
            stream: false,
        };
        let Completion::Complete(outcome) = service(mock).generate(request).await.unwrap() else {
            panic!("expected complete outcome");
        };
        assert_eq!(outcome.response, "4");
        assert_eq!(outcome.eval_count, Some(2));
        assert!(outcome.context.is_empty());
    }

    #[tokio::test]
    async fn test_generate_streaming_never_contacts_backend() {
        let mut mock = MockOllamaPort::new();
        mock.expect_generate().never();

        let request = GenerateRequest {
            model: "gemma3:4b".to_string(),
            prompt: "hi".to_string(),
            stream: true,
        };
        let completion = service(mock).generate(request).await.unwrap();
        assert!(matches!(completion, Completion::StreamingUnsupported(_)));
    }

    #[tokio::test]
    async fn test_generate_failure_prefix() {
        let mut mock = MockOllamaPort::new();
        mock.expect_generate().returning(|_| Err(refused()));

        let request = GenerateRequest {
            model: "gemma3:4b".to_string(),
            prompt: "hi".to_string(),
            stream: false,
        };
        let err = service(mock).generate(request).await.unwrap_err();
        assert!(err.to_string().starts_with("Generate failed:"));
    }
}
