#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod ollama;
pub mod readiness;

pub use ollama::{
    AddressError, DEFAULT_OLLAMA_PORT, DEFAULT_OLLAMA_URL, OllamaClientConfig, OllamaHttpClient,
    resolve_base_url,
};
pub use readiness::{ReadinessPolicy, wait_for_backend_ready};
