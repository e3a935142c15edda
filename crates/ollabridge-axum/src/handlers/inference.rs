//! Chat and generate handlers.
//!
//! Bodies are taken as `Result<Json<_>, JsonRejection>` so decode failures
//! render as `{"detail": ...}` like every other error.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use ollabridge_core::{ChatOutcome, ChatRequest, Completion, GenerateOutcome, GenerateRequest};

use crate::error::HttpError;
use crate::state::AppState;

/// Single-turn chat.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<Completion<ChatOutcome>>, HttpError> {
    let Json(request) = payload?;
    Ok(Json(state.bridge.chat(request).await?))
}

/// Single-shot completion.
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Completion<GenerateOutcome>>, HttpError> {
    let Json(request) = payload?;
    Ok(Json(state.bridge.generate(request).await?))
}
