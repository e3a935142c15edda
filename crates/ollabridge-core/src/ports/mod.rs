//! Port definitions (trait abstractions) for external systems.
//!
//! The only external system the bridge talks to is the Ollama runtime.
//! Ports contain no HTTP client types; adapters live in `ollabridge-runtime`.

pub mod ollama;

pub use ollama::{BackendError, ChatCall, GenerateCall, OllamaPort};

#[cfg(test)]
pub use ollama::MockOllamaPort;
