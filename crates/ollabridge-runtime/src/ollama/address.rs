//! Resolution of the configured Ollama address.
//!
//! Follows the conventions of Ollama's own clients: a bare `host[:port]`
//! is treated as plain HTTP on port 11434, while an address with an explicit
//! scheme keeps that scheme's default port.

use thiserror::Error;
use url::Url;

/// Port Ollama listens on by default.
pub const DEFAULT_OLLAMA_PORT: u16 = 11434;

/// Address used when none is configured.
pub const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";

/// Errors from parsing the configured Ollama address.
#[derive(Debug, Error)]
pub enum AddressError {
    #[error("Invalid Ollama address '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Unsupported scheme '{scheme}' in Ollama address '{input}' (expected http or https)")]
    UnsupportedScheme { input: String, scheme: String },
}

/// Resolve the configured address into a base URL without a trailing slash.
///
/// `None` or a blank value resolves to [`DEFAULT_OLLAMA_URL`].
pub fn resolve_base_url(raw: Option<&str>) -> Result<String, AddressError> {
    let input = raw.map(str::trim).unwrap_or_default();
    if input.is_empty() {
        return Ok(DEFAULT_OLLAMA_URL.to_string());
    }

    let has_scheme = input.contains("://");
    let candidate = if has_scheme {
        input.to_string()
    } else {
        format!("http://{input}")
    };

    let mut url = Url::parse(&candidate).map_err(|source| AddressError::Invalid {
        input: input.to_string(),
        source,
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AddressError::UnsupportedScheme {
            input: input.to_string(),
            scheme: url.scheme().to_string(),
        });
    }

    if !has_scheme && url.port().is_none() {
        // http URLs with a host always accept a port.
        let _ = url.set_port(Some(DEFAULT_OLLAMA_PORT));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}
