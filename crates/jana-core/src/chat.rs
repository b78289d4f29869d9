//! Chat completion service

use crate::error::Result;
use crate::llm::{ChatContext, ChatTransformer};

/// Service for handling chat completions
///
/// History arrives in the context; the service bounds it to the configured
/// maximum before handing the request to the transformer. Provider errors
/// propagate so the caller can pick its own fallback.
pub struct ChatService {
    transformer: Box<dyn ChatTransformer>,
    max_history: usize,
}

impl ChatService {
    pub fn new(transformer: Box<dyn ChatTransformer>, max_history: usize) -> Self {
        Self {
            transformer,
            max_history,
        }
    }

    /// Provider tag of the underlying transformer
    pub fn transformer_name(&self) -> &str {
        self.transformer.name()
    }

    /// Send a message and return the assistant's reply
    pub async fn send_message(&self, message: &str, context: &ChatContext) -> Result<String> {
        if context.history.len() > self.max_history {
            let mut bounded = context.clone();
            let skip = bounded.history.len() - self.max_history;
            bounded.history.drain(..skip);
            return self.transformer.send_message(message, &bounded).await;
        }

        self.transformer.send_message(message, context).await
    }
}
