//! Shared application state type.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// Wraps the `AxumContext` holding the backend handle and the bridge
/// service every handler delegates to.
pub type AppState = Arc<AxumContext>;
