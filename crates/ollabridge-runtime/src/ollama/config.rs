//! Configuration for the Ollama HTTP client.

use std::time::Duration;

use super::address::DEFAULT_OLLAMA_URL;

/// Configuration for [`OllamaHttpClient`](super::OllamaHttpClient).
///
/// # Example
///
/// ```
/// use ollabridge_runtime::OllamaClientConfig;
/// use std::time::Duration;
///
/// let config = OllamaClientConfig::new()
///     .with_base_url("http://ollama:11434")
///     .with_timeout(Duration::from_secs(60));
/// assert_eq!(config.base_url(), "http://ollama:11434");
/// ```
#[derive(Debug, Clone)]
pub struct OllamaClientConfig {
    /// Resolved base URL, no trailing slash.
    pub(crate) base_url: String,
    pub(crate) user_agent: String,
    /// Upper bound for a whole request, generation included.
    pub(crate) timeout: Duration,
    pub(crate) connect_timeout: Duration,
}

impl Default for OllamaClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OLLAMA_URL.to_string(),
            user_agent: concat!("ollabridge/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(300),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl OllamaClientConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL. Expects an already resolved address
    /// (see [`resolve_base_url`](super::resolve_base_url)).
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 300 seconds; CPU-only generation can be slow.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
