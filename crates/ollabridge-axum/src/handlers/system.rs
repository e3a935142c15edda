//! Service banner and health handlers.

use axum::Json;
use axum::extract::State;
use ollabridge_core::HealthReport;
use serde::Serialize;

use crate::state::AppState;

/// Text returned by `GET /`.
pub const BANNER: &str = "Ollama bridge API is running!";

#[derive(Debug, Serialize)]
pub struct Banner {
    pub message: &'static str,
}

/// Liveness of the bridge itself; never touches Ollama.
pub async fn root() -> Json<Banner> {
    Json(Banner { message: BANNER })
}

/// Probe Ollama. Always 200; failures are reported in the body.
pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(state.bridge.check_health().await)
}
