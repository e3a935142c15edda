//! Domain types for the bridge.
//!
//! Everything here is a transient, per-request value. Nothing is persisted
//! and nothing is shared between requests.

pub mod chat;
pub mod health;
pub mod inference;
pub mod model;
pub mod reply;

pub use chat::{ChatMessage, ChatRequest, DEFAULT_MODEL, GenerateRequest, MessageRole};
pub use health::HealthReport;
pub use inference::{CHAT_PRESET, GENERATE_PRESET, GenerationOptions};
pub use model::{MODEL_NAME_STRATEGIES, ModelList, NameStrategy, extract_model_name, model_names};
pub use reply::{
    ChatOutcome, Completion, GenerateOutcome, STREAMING_NOT_IMPLEMENTED, StreamingPlaceholder,
};
