//! Request/response logging for LLM interactions
//!
//! Emits sanitized copies of provider payloads through `tracing`. Message
//! content is truncated so a pasted document does not flood the log.

use crate::config::LlmLogConfig;
use serde_json::Value;

/// Tracing target for LLM traffic, so it can be filtered independently
pub const LOG_TARGET: &str = "jana::llm";

const TRUNCATION_SUFFIX: &str = "... [truncated]";

/// Logger for LLM requests and responses
#[derive(Debug, Clone)]
pub struct LlmLogger {
    enabled: bool,
    truncate_length: usize,
}

impl LlmLogger {
    pub fn new(enabled: bool, truncate_length: usize) -> Self {
        Self {
            enabled,
            truncate_length,
        }
    }

    pub fn from_config(config: &LlmLogConfig) -> Self {
        Self::new(config.enabled, config.truncate_length)
    }

    /// Log an outgoing request payload
    pub fn log_request(&self, endpoint: &str, payload: &Value, conversation_id: &str) {
        if !self.enabled {
            return;
        }
        let sanitized = self.sanitize_request(payload);
        tracing::info!(
            target: LOG_TARGET,
            conversation_id,
            endpoint,
            payload = %sanitized,
            "LLM request"
        );
    }

    /// Log a provider response payload
    pub fn log_response(&self, payload: &Value, conversation_id: &str) {
        if !self.enabled {
            return;
        }
        let sanitized = self.sanitize_response(payload);
        tracing::info!(
            target: LOG_TARGET,
            conversation_id,
            payload = %sanitized,
            "LLM response"
        );
    }

    /// Truncate chat message content in a request payload copy
    fn sanitize_request(&self, payload: &Value) -> Value {
        let mut sanitized = payload.clone();
        if let Some(messages) = sanitized.get_mut("messages").and_then(Value::as_array_mut) {
            for message in messages {
                self.truncate_field(message, "content");
            }
        }
        // Embedding requests carry the text in `input`
        if let Some(input) = sanitized.get("input").and_then(Value::as_str) {
            if input.len() > self.truncate_length {
                let truncated = self.truncate(input);
                sanitized["input"] = Value::String(truncated);
            }
        }
        sanitized
    }

    /// Truncate assistant content in a response payload copy
    fn sanitize_response(&self, payload: &Value) -> Value {
        let mut sanitized = payload.clone();
        if let Some(choices) = sanitized.get_mut("choices").and_then(Value::as_array_mut) {
            for choice in choices {
                if let Some(message) = choice.get_mut("message") {
                    self.truncate_field(message, "content");
                }
                self.truncate_field(choice, "text");
            }
        }
        // Embedding responses: replace vectors with their length
        if let Some(data) = sanitized.get_mut("data").and_then(Value::as_array_mut) {
            for entry in data {
                if let Some(embedding) = entry.get("embedding").and_then(Value::as_array) {
                    let len = embedding.len();
                    entry["embedding"] = Value::String(format!("<{} floats>", len));
                }
            }
        }
        sanitized
    }

    fn truncate_field(&self, value: &mut Value, field: &str) {
        if let Some(content) = value.get(field).and_then(Value::as_str) {
            if content.len() > self.truncate_length {
                let truncated = self.truncate(content);
                value[field] = Value::String(truncated);
            }
        }
    }

    fn truncate(&self, content: &str) -> String {
        let cut: String = content.chars().take(self.truncate_length).collect();
        format!("{}{}", cut, TRUNCATION_SUFFIX)
    }
}
