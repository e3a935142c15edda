//! Shared helpers for ollabridge-axum integration tests.

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use ollabridge_axum::{AxumContext, create_router};
use ollabridge_core::{BackendError, ChatCall, GenerateCall, OllamaPort};

/// Stand-in for Ollama that replays canned replies and records every call.
pub struct ScriptedOllama {
    tags: Result<Value, BackendError>,
    chat: Result<Value, BackendError>,
    generate: Result<Value, BackendError>,
    pub list_calls: Mutex<usize>,
    pub chat_calls: Mutex<Vec<ChatCall>>,
    pub generate_calls: Mutex<Vec<GenerateCall>>,
}

impl ScriptedOllama {
    /// A healthy backend with two installed models.
    pub fn healthy() -> Self {
        Self {
            tags: Ok(json!({
                "models": [
                    {"model": "gemma3:4b", "name": "gemma3:4b", "size": 3_338_801_804_u64},
                    {"name": "llama3.2:1b"},
                    "qwen3:0.6b"
                ]
            })),
            chat: Ok(json!({
                "model": "gemma3:4b",
                "message": {"role": "assistant", "content": "Hello there!"},
                "done": true
            })),
            generate: Ok(json!({
                "model": "gemma3:4b",
                "response": "4",
                "done": true,
                "context": [1, 2, 3],
                "total_duration": 1_200_000_u64,
                "load_duration": 300_000_u64,
                "prompt_eval_count": 7,
                "eval_count": 2
            })),
            list_calls: Mutex::new(0),
            chat_calls: Mutex::new(Vec::new()),
            generate_calls: Mutex::new(Vec::new()),
        }
    }

    /// A backend where every call fails with `err`.
    pub fn failing(err: &BackendError) -> Self {
        Self {
            tags: Err(err.clone()),
            chat: Err(err.clone()),
            generate: Err(err.clone()),
            ..Self::healthy()
        }
    }

    pub fn refused() -> Self {
        Self::failing(&BackendError::Unreachable("connection refused".to_string()))
    }

    #[must_use]
    pub fn with_generate_reply(mut self, reply: Value) -> Self {
        self.generate = Ok(reply);
        self
    }

    #[must_use]
    pub fn with_chat_reply(mut self, reply: Value) -> Self {
        self.chat = Ok(reply);
        self
    }

    pub fn backend_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
            + self.chat_calls.lock().unwrap().len()
            + self.generate_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl OllamaPort for ScriptedOllama {
    async fn list_models(&self) -> Result<Value, BackendError> {
        *self.list_calls.lock().unwrap() += 1;
        self.tags.clone()
    }

    async fn chat(&self, call: &ChatCall) -> Result<Value, BackendError> {
        self.chat_calls.lock().unwrap().push(call.clone());
        self.chat.clone()
    }

    async fn generate(&self, call: &GenerateCall) -> Result<Value, BackendError> {
        self.generate_calls.lock().unwrap().push(call.clone());
        self.generate.clone()
    }
}

/// Build the router over a scripted backend.
pub fn app(ollama: &Arc<ScriptedOllama>) -> Router {
    let port: Arc<dyn OllamaPort> = ollama.clone();
    create_router(AxumContext::new(port))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("non-JSON body ({e}): {}", String::from_utf8_lossy(&bytes)));
    (status, body)
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();
    send(app, request).await
}
