//! Axum-specific error types and mappings.
//!
//! Every failure leaves the server as `{"detail": "..."}` with the matching
//! status code.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ollabridge_core::BridgeError;
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request body could not be decoded into the expected shape.
    #[error("Unprocessable request: {0}")]
    Unprocessable(String),

    /// A call to Ollama failed.
    #[error("Upstream failure: {0}")]
    Upstream(String),
}

impl HttpError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(self) -> String {
        match self {
            Self::Unprocessable(detail) | Self::Upstream(detail) => detail,
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            detail: self.detail(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<BridgeError> for HttpError {
    fn from(err: BridgeError) -> Self {
        Self::Upstream(err.to_string())
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Unprocessable(rejection.body_text())
    }
}
