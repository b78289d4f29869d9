//! LLM provider layer
//!
//! The client speaks HTTP, the transformers speak each provider's dialect,
//! and the factories pick a transformer from config at construction time.

pub mod client;
pub mod local;
pub mod logger;
pub mod openai;
pub mod openai_embedding;
pub mod traits;

pub use client::{LlmClient, REQUEST_TIMEOUT_SECS};
pub use local::LocalChatTransformer;
pub use logger::{LlmLogger, LOG_TARGET};
pub use openai::OpenAiChatTransformer;
pub use openai_embedding::OpenAiEmbeddingTransformer;
pub use traits::{ChatContext, ChatMessage, ChatTransformer, EmbeddingTransformer};

use crate::config::{ChatProvider, JanaConfig};
use crate::error::{JanaError, Result};
use serde_json::Value;
use std::sync::Arc;

/// Construct the chat transformer selected by the config
pub fn chat_transformer_from_config(config: &JanaConfig) -> Result<Box<dyn ChatTransformer>> {
    let logger = LlmLogger::from_config(&config.logging.llm);
    let transformer_config = config.chat_transformer_config();
    let client = LlmClient::new(transformer_config.base_url.clone())?;

    match config.llm.provider {
        ChatProvider::Local => Ok(Box::new(LocalChatTransformer::new(
            client,
            logger,
            transformer_config,
        ))),
        ChatProvider::Openai => {
            if transformer_config.api_key.is_none() {
                return Err(JanaError::Config(
                    "OPENAI_API_KEY is required for the openai chat provider".to_string(),
                ));
            }
            Ok(Box::new(OpenAiChatTransformer::new(
                client,
                logger,
                transformer_config,
            )))
        }
    }
}

/// Construct the embedding transformer selected by the config
pub fn embedding_transformer_from_config(
    config: &JanaConfig,
) -> Result<Arc<dyn EmbeddingTransformer>> {
    let logger = LlmLogger::from_config(&config.logging.llm);
    let transformer_config = config.embedding_transformer_config();
    if transformer_config.api_key.is_none() {
        return Err(JanaError::Config(
            "OPENAI_API_KEY is required for the openai embedding provider".to_string(),
        ));
    }
    let client = LlmClient::new(transformer_config.base_url.clone())?;
    Ok(Arc::new(OpenAiEmbeddingTransformer::new(
        client,
        logger,
        transformer_config,
    )))
}

/// Assemble the message list for a chat completion request.
///
/// Order: system message (context override, else the configured one, else
/// the transformer default), well-formed history entries as given, then the
/// current user message.
pub(crate) fn build_messages(
    message: &str,
    context: &ChatContext,
    configured_system: Option<&str>,
    default_system: &str,
) -> Vec<ChatMessage> {
    let system = context
        .system_message
        .as_deref()
        .or(configured_system)
        .unwrap_or(default_system);

    let mut messages = vec![ChatMessage::system(system)];
    messages.extend(
        context
            .history
            .iter()
            .filter(|m| m.is_well_formed())
            .cloned(),
    );
    messages.push(ChatMessage::user(message));
    messages
}

/// Pull the assistant text out of a chat completion response
pub(crate) fn extract_assistant_text(response: &Value) -> Result<String> {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            JanaError::MalformedResponse(
                "chat completion response has no choices[0].message.content".to_string(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const DEFAULT: &str = "default system";

    #[test]
    fn default_system_message_when_nothing_configured() {
        let context = ChatContext::default();
        let messages = build_messages("hi", &context, None, DEFAULT);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], ChatMessage::system(DEFAULT));
        assert_eq!(messages[1], ChatMessage::user("hi"));
    }

    #[test]
    fn context_system_message_wins_over_configured() {
        let context = ChatContext {
            system_message: Some("from context".to_string()),
            ..Default::default()
        };
        let messages = build_messages("hi", &context, Some("from config"), DEFAULT);
        assert_eq!(messages[0].content, "from context");
    }

    #[test]
    fn malformed_history_entries_are_dropped() {
        let context = ChatContext {
            history: vec![
                ChatMessage::user("first"),
                ChatMessage {
                    role: String::new(),
                    content: "no role".to_string(),
                },
                ChatMessage::assistant("second"),
                ChatMessage::user(""),
            ],
            ..Default::default()
        };
        let messages = build_messages("now", &context, None, DEFAULT);

        let roles: Vec<&str> = messages.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, vec!["system", "user", "assistant", "user"]);
        assert_eq!(messages.last().unwrap().content, "now");
    }

    #[test]
    fn extracts_assistant_text() {
        let response = json!({
            "choices": [{"message": {"role": "assistant", "content": "hello"}}]
        });
        assert_eq!(extract_assistant_text(&response).unwrap(), "hello");
    }

    #[test]
    fn missing_choices_is_malformed() {
        let response = json!({"choices": []});
        let err = extract_assistant_text(&response).unwrap_err();
        assert!(matches!(err, JanaError::MalformedResponse(_)));
    }
}
