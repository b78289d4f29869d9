//! Embedding transformer for the OpenAI API

use super::client::bearer_headers;
use super::traits::EmbeddingTransformer;
use super::{LlmClient, LlmLogger, LOG_TARGET};
use crate::config::EmbeddingTransformerConfig;
use crate::error::{JanaError, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use uuid::Uuid;

const EMBEDDINGS_ENDPOINT: &str = "/v1/embeddings";

/// Transformer for the OpenAI embeddings API
///
/// The dimension is taken from a fixed per-model table, never from a
/// runtime value.
pub struct OpenAiEmbeddingTransformer {
    client: LlmClient,
    logger: LlmLogger,
    config: EmbeddingTransformerConfig,
    headers: Vec<(String, String)>,
    dimension: usize,
}

impl OpenAiEmbeddingTransformer {
    pub fn new(client: LlmClient, logger: LlmLogger, config: EmbeddingTransformerConfig) -> Self {
        let headers = config
            .api_key
            .as_deref()
            .map(bearer_headers)
            .unwrap_or_default();
        let dimension = dimension_for_model(&config.model);
        Self {
            client,
            logger,
            config,
            headers,
            dimension,
        }
    }
}

#[async_trait]
impl EmbeddingTransformer for OpenAiEmbeddingTransformer {
    async fn generate_embedding(&self, text: &str) -> Result<Vec<f32>> {
        let payload = json!({
            "model": self.config.model,
            "input": text,
        });

        let request_id = Uuid::new_v4().to_string();
        self.logger
            .log_request(EMBEDDINGS_ENDPOINT, &payload, &request_id);

        let response = self
            .client
            .send_request(EMBEDDINGS_ENDPOINT, &payload, &self.headers)
            .await
            .map_err(|e| {
                tracing::error!(
                    target: LOG_TARGET,
                    request_id = %request_id,
                    error = %e,
                    text_len = text.len(),
                    "embedding generation failed"
                );
                e
            })?;

        self.logger.log_response(&response, &request_id);

        extract_embedding_vector(&response)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

/// Fixed dimension table per embedding model.
///
/// text-embedding-ada-002 and text-embedding-3-small both produce 1536,
/// text-embedding-3-large produces 3072.
fn dimension_for_model(model: &str) -> usize {
    match model {
        "text-embedding-3-large" => 3072,
        _ => 1536,
    }
}

/// Pull the first vector out of an embeddings response
fn extract_embedding_vector(response: &Value) -> Result<Vec<f32>> {
    let embedding = response
        .pointer("/data/0/embedding")
        .ok_or_else(|| {
            JanaError::MalformedResponse(
                "embedding response has no data[0].embedding".to_string(),
            )
        })?;

    serde_json::from_value(embedding.clone())
        .map_err(|e| JanaError::MalformedResponse(format!("embedding is not a float array: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_model_has_3072_dimensions() {
        assert_eq!(dimension_for_model("text-embedding-3-large"), 3072);
    }

    #[test]
    fn other_models_default_to_1536() {
        assert_eq!(dimension_for_model("text-embedding-ada-002"), 1536);
        assert_eq!(dimension_for_model("text-embedding-3-small"), 1536);
        assert_eq!(dimension_for_model("something-else"), 1536);
    }

    #[test]
    fn extracts_first_vector() {
        let response = json!({"data": [{"embedding": [0.25, -0.5, 1.0]}]});
        let vector = extract_embedding_vector(&response).unwrap();
        assert_eq!(vector, vec![0.25, -0.5, 1.0]);
    }

    #[test]
    fn empty_data_is_malformed() {
        let response = json!({"data": []});
        assert!(matches!(
            extract_embedding_vector(&response),
            Err(JanaError::MalformedResponse(_))
        ));
    }

    #[test]
    fn non_numeric_vector_is_malformed() {
        let response = json!({"data": [{"embedding": ["a", "b"]}]});
        assert!(matches!(
            extract_embedding_vector(&response),
            Err(JanaError::MalformedResponse(_))
        ));
    }
}
