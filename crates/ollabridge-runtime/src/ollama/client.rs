//! `reqwest` implementation of [`OllamaPort`].

use std::error::Error as StdError;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::debug;

use ollabridge_core::{BackendError, ChatCall, GenerateCall, OllamaPort};

use super::config::OllamaClientConfig;

/// HTTP client for the Ollama REST API.
///
/// Holds a pooled `reqwest::Client`; one instance is shared by every
/// request handler.
#[derive(Debug, Clone)]
pub struct OllamaHttpClient {
    client: Client,
    base_url: String,
}

impl OllamaHttpClient {
    /// Build a client from configuration.
    ///
    /// Fails only if the TLS backend cannot be initialised.
    pub fn new(config: &OllamaClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a request and decode the JSON body.
    async fn send_json(&self, request: RequestBuilder) -> Result<Value, BackendError> {
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Unreachable(describe(&e)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| BackendError::Unreachable(describe(&e)))?;

        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        serde_json::from_slice(&body).map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}

/// Flatten a `reqwest` error and its sources into one line.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = StdError::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Extract Ollama's `{"error": "..."}` text, falling back to the raw body.
fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|json| json.get("error").and_then(Value::as_str).map(str::to_owned))
        .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string())
}

#[async_trait]
impl OllamaPort for OllamaHttpClient {
    async fn list_models(&self) -> Result<Value, BackendError> {
        let url = self.endpoint("/api/tags");
        debug!("GET {url}");
        self.send_json(self.client.get(&url)).await
    }

    async fn chat(&self, call: &ChatCall) -> Result<Value, BackendError> {
        let url = self.endpoint("/api/chat");
        debug!(model = %call.model, "POST {url}");
        self.send_json(self.client.post(&url).json(call)).await
    }

    async fn generate(&self, call: &GenerateCall) -> Result<Value, BackendError> {
        let url = self.endpoint("/api/generate");
        debug!(model = %call.model, "POST {url}");
        self.send_json(self.client.post(&url).json(call)).await
    }
}
