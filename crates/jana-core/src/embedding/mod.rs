//! Embedding generation and similarity ranking

pub mod store;

pub use store::EmbeddingStore;

use crate::error::Result;
use crate::llm::EmbeddingTransformer;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Compute cosine similarity between two embeddings.
///
/// Returns 0.0 when either slice is empty or has zero magnitude. The dot
/// product walks `a`'s positions; when lengths differ, the surplus
/// dimensions simply contribute nothing to it.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Candidate for in-memory similarity ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingCandidate {
    pub id: String,
    pub embedding: Vec<f32>,
    /// Caller payload carried through to the matching result
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// One ranked result from [`EmbeddingService::find_similar`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityMatch {
    pub id: String,
    pub similarity: f32,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Service for generating text embeddings and ranking by similarity
///
/// Generation failures propagate as typed errors; a zero similarity always
/// means the vectors are dissimilar, never that the provider was down.
pub struct EmbeddingService {
    transformer: Arc<dyn EmbeddingTransformer>,
}

impl EmbeddingService {
    pub fn new(transformer: Arc<dyn EmbeddingTransformer>) -> Self {
        Self { transformer }
    }

    /// Generate an embedding for the given text
    pub async fn generate_embedding(&self, text: &str) -> Result<Vec<f32>> {
        self.transformer.generate_embedding(text).await
    }

    /// Embedding dimension of the underlying transformer
    pub fn dimension(&self) -> usize {
        self.transformer.dimension()
    }

    /// Provider tag of the underlying transformer
    pub fn transformer_name(&self) -> String {
        self.transformer.name().to_string()
    }

    /// Model id of the underlying transformer
    pub fn model(&self) -> String {
        self.transformer.model().to_string()
    }

    /// Cosine similarity between two embedding vectors
    pub fn calculate_similarity(&self, a: &[f32], b: &[f32]) -> f32 {
        cosine_similarity(a, b)
    }

    /// Rank candidates by similarity to the query vector.
    ///
    /// Candidates with an empty id or embedding are skipped. The sort is
    /// stable, so equal scores keep their insertion order. At most `limit`
    /// results are returned.
    pub fn find_similar(
        &self,
        query: &[f32],
        candidates: &[EmbeddingCandidate],
        limit: usize,
    ) -> Vec<SimilarityMatch> {
        if query.is_empty() || candidates.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<SimilarityMatch> = candidates
            .iter()
            .filter(|c| !c.id.is_empty() && !c.embedding.is_empty())
            .map(|c| SimilarityMatch {
                id: c.id.clone(),
                similarity: cosine_similarity(query, &c.embedding),
                data: c.data.clone(),
            })
            .collect();

        matches.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        matches.truncate(limit);
        matches
    }
}
