//! Ollama REST adapter.

mod address;
mod client;
mod config;

pub use address::{AddressError, DEFAULT_OLLAMA_PORT, DEFAULT_OLLAMA_URL, resolve_base_url};
pub use client::OllamaHttpClient;
pub use config::OllamaClientConfig;
