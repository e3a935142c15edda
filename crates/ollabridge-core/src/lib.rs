#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    CHAT_PRESET, ChatMessage, ChatOutcome, ChatRequest, Completion, DEFAULT_MODEL,
    GENERATE_PRESET, GenerateOutcome, GenerateRequest, GenerationOptions, HealthReport,
    MessageRole, ModelList, STREAMING_NOT_IMPLEMENTED, StreamingPlaceholder, extract_model_name,
    model_names,
};
pub use ports::{BackendError, ChatCall, GenerateCall, OllamaPort};
pub use services::{BridgeError, BridgeService};
