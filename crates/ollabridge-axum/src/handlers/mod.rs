//! HTTP handlers.
//!
//! Handlers extract the request, delegate to `BridgeService` and map errors
//! through `HttpError`.

pub mod inference;
pub mod models;
pub mod system;
