//! Route definitions and router construction.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::bootstrap::AxumContext;
use crate::handlers;
use crate::state::AppState;

/// Build the application router.
pub fn create_router(ctx: AxumContext) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/", get(handlers::system::root))
        .route("/health", get(handlers::system::health))
        .route("/models", get(handlers::models::list))
        .route("/chat", post(handlers::inference::chat))
        .route("/generate", post(handlers::inference::generate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
