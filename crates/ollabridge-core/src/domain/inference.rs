//! Generation parameters sent to Ollama.
//!
//! The bridge does not let callers tune sampling. Each operation has a fixed
//! preset, applied to every request regardless of the body.

use serde::{Deserialize, Serialize};

/// Ollama `options` object.
///
/// Field names match Ollama's API (`num_predict` rather than `max_tokens`).
/// Unset fields are omitted so Ollama falls back to the model's Modelfile.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GenerationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Maximum number of tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat_penalty: Option<f64>,
    /// Context window size in tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_ctx: Option<u64>,
}

/// Preset for `POST /chat`: conversational sampling with short replies.
pub const CHAT_PRESET: GenerationOptions = GenerationOptions {
    temperature: Some(0.7),
    num_predict: Some(150),
    top_p: Some(0.9),
    top_k: Some(40),
    repeat_penalty: Some(1.1),
    num_ctx: Some(65_536),
};

/// Preset for `POST /generate`: deterministic, terse answers.
pub const GENERATE_PRESET: GenerationOptions = GenerationOptions {
    temperature: Some(0.0),
    num_predict: Some(30),
    top_p: Some(0.3),
    top_k: Some(10),
    repeat_penalty: None,
    num_ctx: Some(65_536),
};
