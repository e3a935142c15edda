//! Normalized chat and generate replies.
//!
//! Ollama replies are kept as raw JSON and read field by field. A missing or
//! mistyped field falls back to a default instead of failing the request:
//! `done` defaults to `true`, `context` to `[]`, text to `""` and telemetry
//! counters to `null`.

use serde::Serialize;
use serde_json::Value;

/// Body returned in place of a stream when a caller sets `stream: true`.
pub const STREAMING_NOT_IMPLEMENTED: &str = "Streaming not implemented in this example";

/// Placeholder body for streaming requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamingPlaceholder {
    pub message: &'static str,
}

impl Default for StreamingPlaceholder {
    fn default() -> Self {
        Self {
            message: STREAMING_NOT_IMPLEMENTED,
        }
    }
}

/// Outcome of a chat or generate operation.
///
/// Serialized untagged so either variant renders as its own body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Completion<T> {
    Complete(T),
    StreamingUnsupported(StreamingPlaceholder),
}

impl<T> Completion<T> {
    pub fn streaming_unsupported() -> Self {
        Self::StreamingUnsupported(StreamingPlaceholder::default())
    }
}

fn done_flag(reply: &Value) -> bool {
    reply.get("done").and_then(Value::as_bool).unwrap_or(true)
}

fn counter(reply: &Value, field: &str) -> Option<u64> {
    reply.get(field).and_then(Value::as_u64)
}

/// Body of a successful `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatOutcome {
    pub model: String,
    pub message: String,
    pub done: bool,
}

impl ChatOutcome {
    /// Read an Ollama `/api/chat` reply.
    ///
    /// `model` is the name the caller asked for, not the one Ollama echoes.
    pub fn from_reply(model: impl Into<String>, reply: &Value) -> Self {
        let message = reply
            .pointer("/message/content")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Self {
            model: model.into(),
            message,
            done: done_flag(reply),
        }
    }
}

/// Body of a successful `POST /generate`.
///
/// Telemetry fields are always present in the output, as `null` when Ollama
/// did not report them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateOutcome {
    pub model: String,
    pub response: String,
    pub done: bool,
    /// Opaque conversation state, passed through as Ollama sent it.
    pub context: Vec<Value>,
    /// Nanoseconds spent on the whole request.
    pub total_duration: Option<u64>,
    /// Nanoseconds spent loading the model.
    pub load_duration: Option<u64>,
    pub prompt_eval_count: Option<u64>,
    pub eval_count: Option<u64>,
}

impl GenerateOutcome {
    /// Read an Ollama `/api/generate` reply.
    pub fn from_reply(model: impl Into<String>, reply: &Value) -> Self {
        let response = reply
            .get("response")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let context = reply
            .get("context")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        Self {
            model: model.into(),
            response,
            done: done_flag(reply),
            context,
            total_duration: counter(reply, "total_duration"),
            load_duration: counter(reply, "load_duration"),
            prompt_eval_count: counter(reply, "prompt_eval_count"),
            eval_count: counter(reply, "eval_count"),
        }
    }
}
