//! Database layer for jana
//!
//! SQLite-backed storage for embedding records, with the cosine-distance
//! operator registered into the engine at connection open.

pub mod embeddings;
mod schema;

pub use embeddings::{vector_from_text, vector_to_text, EmbeddingRecord};
pub use schema::Database;

use std::path::PathBuf;

impl Database {
    /// Get the default database path
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::DATA_DIR_NAME)
            .join("jana.sqlite")
    }
}
