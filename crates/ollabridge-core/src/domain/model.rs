//! Model-name extraction from Ollama's list reply.
//!
//! Ollama has described installed models in more than one way over time:
//! newer releases expose a `model` field, older ones only `name`, and some
//! clients collapse entries to bare strings. Each shape is handled by a
//! strategy in [`MODEL_NAME_STRATEGIES`], tried in order; the first strategy
//! that yields a name wins.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// A single extraction strategy: returns the display name if the entry has
/// the shape this strategy understands.
pub type NameStrategy = fn(&Value) -> Option<&str>;

fn model_field(entry: &Value) -> Option<&str> {
    entry.get("model").and_then(Value::as_str)
}

fn name_field(entry: &Value) -> Option<&str> {
    entry.get("name").and_then(Value::as_str)
}

fn bare_string(entry: &Value) -> Option<&str> {
    entry.as_str()
}

/// Ordered extraction chain. Order matters: `model` is preferred over `name`.
pub const MODEL_NAME_STRATEGIES: &[(&str, NameStrategy)] = &[
    ("model field", model_field as NameStrategy),
    ("name field", name_field as NameStrategy),
    ("bare string", bare_string as NameStrategy),
];

/// Extract the display name of a single model entry.
///
/// Returns `None` when no strategy recognises the entry.
pub fn extract_model_name(entry: &Value) -> Option<&str> {
    MODEL_NAME_STRATEGIES
        .iter()
        .find_map(|(_, strategy)| strategy(entry))
}

/// Locate the model entries inside a list reply.
///
/// Accepts `{"models": [...]}` or a bare array; anything else is treated as
/// an empty catalog.
fn model_entries(reply: &Value) -> &[Value] {
    match reply {
        Value::Object(map) => map
            .get("models")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default(),
        Value::Array(entries) => entries.as_slice(),
        _ => &[],
    }
}

/// Normalize a list reply into display names, preserving backend order.
///
/// Entries that match no strategy are skipped.
pub fn model_names(reply: &Value) -> Vec<String> {
    model_entries(reply)
        .iter()
        .filter_map(|entry| {
            let name = extract_model_name(entry);
            if name.is_none() {
                debug!(entry = %entry, "Skipping model entry with no recognisable name");
            }
            name.map(str::to_owned)
        })
        .collect()
}

/// Response body of `GET /models`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelList {
    pub models: Vec<String>,
}

impl ModelList {
    /// Build the list from a raw Ollama reply.
    pub fn from_reply(reply: &Value) -> Self {
        Self {
            models: model_names(reply),
        }
    }
}
