//! Model listing handler.

use axum::Json;
use axum::extract::State;
use ollabridge_core::ModelList;

use crate::error::HttpError;
use crate::state::AppState;

/// List installed model names.
pub async fn list(State(state): State<AppState>) -> Result<Json<ModelList>, HttpError> {
    Ok(Json(state.bridge.list_models().await?))
}
