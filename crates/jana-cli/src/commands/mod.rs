//! Command implementations

pub mod chat;
pub mod compare;
pub mod embed;
pub mod similar;
pub mod status;

use jana_core::{Database, EmbeddingService, EmbeddingStore, JanaConfig, Result};

/// Build the embedding store from config and an open database
pub fn embedding_store(config: &JanaConfig, db: Database) -> Result<EmbeddingStore> {
    let transformer = jana_core::embedding_transformer_from_config(config)?;
    Ok(EmbeddingStore::new(db, EmbeddingService::new(transformer)))
}
