//! Persistent embedding storage
//!
//! Couples the embedding service with the database: generate a vector, keep
//! it as a record, and answer nearest-neighbor queries by text.

use super::EmbeddingService;
use crate::db::{Database, EmbeddingRecord};
use crate::error::Result;

/// Storage facade over generated embeddings
pub struct EmbeddingStore {
    db: Database,
    service: EmbeddingService,
}

impl EmbeddingStore {
    pub fn new(db: Database, service: EmbeddingService) -> Self {
        Self { db, service }
    }

    /// The wrapped embedding service
    pub fn service(&self) -> &EmbeddingService {
        &self.service
    }

    /// The underlying database
    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Generate and persist an embedding for the given text.
    ///
    /// Every call creates a new record; identical text twice yields two
    /// records. A changed text is a new record, never an update.
    pub async fn store_embedding(
        &self,
        text: &str,
        content_type: &str,
        content_id: Option<&str>,
    ) -> Result<EmbeddingRecord> {
        let vector = self.service.generate_embedding(text).await?;
        let model = self.service.model();

        let record = self
            .db
            .insert_embedding(content_type, content_id, text, &model, &vector)?;

        tracing::debug!(
            id = record.id,
            content_type,
            dimension = record.dimension,
            "stored embedding"
        );

        Ok(record)
    }

    /// Embed the query text and return the nearest stored records.
    ///
    /// Distance is computed by the storage engine's cosine-distance
    /// operator, ascending (smaller = more similar), optionally filtered to
    /// one content_type. Each returned record carries its distance.
    pub async fn find_similar_by_text(
        &self,
        query_text: &str,
        content_type: Option<&str>,
        limit: usize,
    ) -> Result<Vec<EmbeddingRecord>> {
        let query_vector = self.service.generate_embedding(query_text).await?;
        self.db
            .find_similar_embeddings(&query_vector, content_type, limit)
    }
}
