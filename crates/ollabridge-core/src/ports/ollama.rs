//! Ollama runtime port.
//!
//! Abstracts the three Ollama calls the bridge needs: listing installed
//! models (also used as the liveness probe), chat, and single-shot
//! generation. Replies are returned as raw JSON so the domain layer can
//! read them defensively.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::domain::{ChatMessage, GenerationOptions};

/// Request body for Ollama's `/api/chat`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCall {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    /// Always `false`: the bridge never consumes a token stream.
    pub stream: bool,
    pub options: GenerationOptions,
}

/// Request body for Ollama's `/api/generate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateCall {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    pub options: GenerationOptions,
}

/// Errors that can occur while talking to Ollama.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// Transport failure: connection refused, timeout, protocol error.
    #[error("Failed to connect to Ollama: {0}")]
    Unreachable(String),

    /// Ollama answered with a non-success status.
    #[error("{message} (status code: {status})")]
    Status {
        status: u16,
        /// Ollama's `error` text, or the raw body when it has none.
        message: String,
    },

    /// The reply body was not JSON.
    #[error("Invalid response from Ollama: {0}")]
    InvalidResponse(String),
}

impl BackendError {
    /// Returns true if the error means Ollama could not be reached at all.
    #[must_use]
    pub const fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable(_))
    }
}

/// Port for calling the Ollama runtime.
///
/// Implementations must be safe to share across concurrently handled
/// requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OllamaPort: Send + Sync {
    /// List installed models (`GET /api/tags`).
    ///
    /// Cheap enough to double as the liveness probe.
    async fn list_models(&self) -> Result<Value, BackendError>;

    /// Run a non-streaming chat completion (`POST /api/chat`).
    async fn chat(&self, call: &ChatCall) -> Result<Value, BackendError>;

    /// Run a non-streaming completion (`POST /api/generate`).
    async fn generate(&self, call: &GenerateCall) -> Result<Value, BackendError>;
}
