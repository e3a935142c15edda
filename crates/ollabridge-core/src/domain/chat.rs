//! Inbound request types and the conversation message sent to Ollama.

use serde::{Deserialize, Serialize};

/// Model used when a request does not name one.
pub const DEFAULT_MODEL: &str = "gemma3:4b";

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatRequest {
    #[serde(default = "default_model")]
    pub model: String,
    /// The single user turn forwarded to the model.
    pub message: String,
    /// Accepted for compatibility; streaming always yields the placeholder.
    #[serde(default)]
    pub stream: bool,
}

/// Body of `POST /generate`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerateRequest {
    #[serde(default = "default_model")]
    pub model: String,
    pub prompt: String,
    #[serde(default)]
    pub stream: bool,
}

/// Role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A single conversation message in Ollama's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    /// Create a user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_defaults() {
        let req: ChatRequest = serde_json::from_str(r#"{"message": "hello"}"#).unwrap();
        assert_eq!(req.model, "gemma3:4b");
        assert_eq!(req.message, "hello");
        assert!(!req.stream);
    }

    #[test]
    fn test_chat_request_requires_message() {
        let result = serde_json::from_str::<ChatRequest>(r#"{"model": "llama3"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_generate_request_explicit_fields() {
        let req: GenerateRequest =
            serde_json::from_str(r#"{"model": "qwen2", "prompt": "2+2?", "stream": true}"#)
                .unwrap();
        assert_eq!(req.model, "qwen2");
        assert_eq!(req.prompt, "2+2?");
        assert!(req.stream);
    }

    #[test]
    fn test_user_message_serialization() {
        let json = serde_json::to_value(ChatMessage::user("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hi"}));
    }
}
