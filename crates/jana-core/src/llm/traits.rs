//! Transformer trait definitions

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Chat message for completion requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }

    /// A message is well formed when both role and content are non-empty
    pub fn is_well_formed(&self) -> bool {
        !self.role.is_empty() && !self.content.is_empty()
    }
}

/// Per-call context for a chat request
///
/// History is passed explicitly; there is no session storage in the core.
#[derive(Debug, Clone, Default)]
pub struct ChatContext {
    /// Overrides the configured system message for this call
    pub system_message: Option<String>,

    /// Prior conversation turns, oldest first
    pub history: Vec<ChatMessage>,

    /// Conversation id threaded through request/response logs;
    /// generated when absent
    pub conversation_id: Option<String>,
}

/// Adapter that turns a chat request into a provider-specific API call
#[async_trait]
pub trait ChatTransformer: Send + Sync {
    /// Send a message and return the assistant's reply text
    async fn send_message(&self, message: &str, context: &ChatContext) -> Result<String>;

    /// Provider tag (e.g. "local", "openai")
    fn name(&self) -> &str;
}

/// Adapter that turns text into a provider-generated embedding vector
#[async_trait]
pub trait EmbeddingTransformer: Send + Sync {
    /// Generate an embedding for a single text
    async fn generate_embedding(&self, text: &str) -> Result<Vec<f32>>;

    /// Fixed embedding dimension for the configured model
    fn dimension(&self) -> usize;

    /// Provider tag (e.g. "openai")
    fn name(&self) -> &str;

    /// Model id used for generation (stored alongside each record)
    fn model(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_roles() {
        assert_eq!(ChatMessage::system("s").role, "system");
        assert_eq!(ChatMessage::user("u").role, "user");
        assert_eq!(ChatMessage::assistant("a").role, "assistant");
    }

    #[test]
    fn empty_role_or_content_is_malformed() {
        assert!(!ChatMessage { role: String::new(), content: "x".into() }.is_well_formed());
        assert!(!ChatMessage::user("").is_well_formed());
        assert!(ChatMessage::user("hello").is_well_formed());
    }
}
