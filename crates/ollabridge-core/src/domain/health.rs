//! Health report returned by `GET /health`.

use serde::Serialize;

/// Result of probing Ollama.
///
/// Always rendered with HTTP 200; callers inspect `status` and
/// `ollama_connected` instead of the status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum HealthReport {
    /// Ollama answered the probe.
    Healthy {
        ollama_connected: bool,
        models: Vec<String>,
    },
    /// The probe failed.
    Unhealthy {
        error: String,
        ollama_connected: bool,
    },
}

impl HealthReport {
    pub const fn healthy(models: Vec<String>) -> Self {
        Self::Healthy {
            ollama_connected: true,
            models,
        }
    }

    pub fn unhealthy(error: impl Into<String>) -> Self {
        Self::Unhealthy {
            error: error.into(),
            ollama_connected: false,
        }
    }

    /// Check if the report represents a reachable backend.
    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy { .. })
    }
}
