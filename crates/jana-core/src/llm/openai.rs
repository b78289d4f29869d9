//! Chat transformer for the OpenAI API

use super::client::bearer_headers;
use super::traits::{ChatContext, ChatTransformer};
use super::{build_messages, extract_assistant_text, LlmClient, LlmLogger, LOG_TARGET};
use crate::config::ChatTransformerConfig;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::json;
use uuid::Uuid;

const DEFAULT_SYSTEM_MESSAGE: &str =
    "You are Jana, a helpful assistant. Provide concise, accurate responses.";

/// Transformer for the OpenAI chat completions API
pub struct OpenAiChatTransformer {
    client: LlmClient,
    logger: LlmLogger,
    config: ChatTransformerConfig,
    headers: Vec<(String, String)>,
}

impl OpenAiChatTransformer {
    pub fn new(client: LlmClient, logger: LlmLogger, config: ChatTransformerConfig) -> Self {
        let headers = config
            .api_key
            .as_deref()
            .map(bearer_headers)
            .unwrap_or_default();
        Self {
            client,
            logger,
            config,
            headers,
        }
    }
}

#[async_trait]
impl ChatTransformer for OpenAiChatTransformer {
    async fn send_message(&self, message: &str, context: &ChatContext) -> Result<String> {
        let messages = build_messages(
            message,
            context,
            self.config.system_message.as_deref(),
            DEFAULT_SYSTEM_MESSAGE,
        );

        let payload = json!({
            "model": self.config.model,
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
            .send_request(&self.config.endpoint, &payload, &self.headers)
            .await
            .map_err(|e| {
                tracing::error!(
                    target: LOG_TARGET,
                    conversation_id = %conversation_id,
                    error = %e,
                    "OpenAI chat completion failed"
                );
                e
            })?;

        self.logger.log_response(&response, &conversation_id);

        extract_assistant_text(&response)
    }

    fn name(&self) -> &str {
        "openai"
    }
}
