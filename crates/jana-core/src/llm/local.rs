//! Chat transformer for a local OpenAI-compatible server

use super::traits::{ChatContext, ChatTransformer};
use super::{build_messages, extract_assistant_text, LlmClient, LlmLogger, LOG_TARGET};
use crate::config::ChatTransformerConfig;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::json;
use uuid::Uuid;

const DEFAULT_SYSTEM_MESSAGE: &str =
    "You are Jana, a helpful personal assistant. Be concise, friendly, and provide accurate information.";

/// Transformer for a local LLM server (LM Studio, llama.cpp server, etc.)
///
/// The server picks whichever model it has loaded, so the payload carries no
/// model field.
pub struct LocalChatTransformer {
    client: LlmClient,
    logger: LlmLogger,
    config: ChatTransformerConfig,
}

impl LocalChatTransformer {
    pub fn new(client: LlmClient, logger: LlmLogger, config: ChatTransformerConfig) -> Self {
        Self {
            client,
            logger,
            config,
        }
    }
}

#[async_trait]
impl ChatTransformer for LocalChatTransformer {
    async fn send_message(&self, message: &str, context: &ChatContext) -> Result<String> {
        let messages = build_messages(
            message,
            context,
            self.config.system_message.as_deref(),
            DEFAULT_SYSTEM_MESSAGE,
        );

        let payload = json!({
            "messages": messages,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
        });

        let conversation_id = context
            .conversation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        self.logger
            .log_request(&self.config.endpoint, &payload, &conversation_id);

        let response = self
            .client
            .send_request(&self.config.endpoint, &payload, &[])
            .await
            .map_err(|e| {
                tracing::error!(
                    target: LOG_TARGET,
                    conversation_id = %conversation_id,
                    error = %e,
                    "local chat completion failed"
                );
                e
            })?;

        self.logger.log_response(&response, &conversation_id);

        extract_assistant_text(&response)
    }

    fn name(&self) -> &str {
        "local"
    }
}
