//! Embedding record storage
//!
//! Persists vectors in the textual `[0.1,0.2,...]` encoding and answers
//! nearest-neighbor queries through the engine-registered distance
//! operator.

use super::Database;
use crate::error::{JanaError, Result};
use chrono::Utc;
use rusqlite::{params, Row};
use serde::{Deserialize, Serialize};

/// A stored embedding with its metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingRecord {
    pub id: i64,
    pub content_type: String,
    pub content_id: Option<String>,
    pub text: String,
    pub model: String,
    pub dimension: usize,
    pub vector: Vec<f32>,
    pub created_at: String,
    pub updated_at: String,
    /// Cosine distance to the query; present on nearest-neighbor reads only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl EmbeddingRecord {
    /// Similarity view of the distance, when one is attached
    pub fn similarity(&self) -> Option<f64> {
        self.distance.map(|d| 1.0 - d)
    }
}

/// Serialize a vector into the bracketed text encoding
pub fn vector_to_text(vector: &[f32]) -> String {
    let parts: Vec<String> = vector.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(","))
}

/// Parse a vector from the bracketed text encoding
pub fn vector_from_text(text: &str) -> Result<Vec<f32>> {
    let inner = text
        .trim()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| {
            JanaError::InvalidInput(format!("not a vector literal: {:.32}", text))
        })?;

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f32>()
                .map_err(|e| JanaError::InvalidInput(format!("bad vector component: {}", e)))
        })
        .collect()
}

impl Database {
    /// Insert a new embedding record and return it as stored.
    ///
    /// The dimension is taken from the vector itself, keeping the
    /// length-equals-dimension invariant by construction.
    pub fn insert_embedding(
        &self,
        content_type: &str,
        content_id: Option<&str>,
        text: &str,
        model: &str,
        vector: &[f32],
    ) -> Result<EmbeddingRecord> {
        let now = Utc::now().to_rfc3339();
        let encoded = vector_to_text(vector);

        self.conn.execute(
            "INSERT INTO embeddings (content_type, content_id, text, model, dimension, embedding, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
            params![
                content_type,
                content_id,
                text,
                model,
                vector.len() as i64,
                encoded,
                now
            ],
        )?;

        let id = self.conn.last_insert_rowid();

        Ok(EmbeddingRecord {
            id,
            content_type: content_type.to_string(),
            content_id: content_id.map(str::to_string),
            text: text.to_string(),
            model: model.to_string(),
            dimension: vector.len(),
            vector: vector.to_vec(),
            created_at: now.clone(),
            updated_at: now,
            distance: None,
        })
    }

    /// Look up a single embedding record by id
    pub fn get_embedding(&self, id: i64) -> Result<Option<EmbeddingRecord>> {
        let result = self.conn.query_row(
            "SELECT id, content_type, content_id, text, model, dimension, embedding, created_at, updated_at
             FROM embeddings WHERE id = ?1",
            params![id],
            record_from_row,
        );

        match result {
            Ok(record) => Ok(Some(record?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Nearest-neighbor query against the stored vectors.
    ///
    /// Orders ascending by the engine-computed cosine distance, optionally
    /// filtered by content_type, and attaches the distance to each record.
    pub fn find_similar_embeddings(
        &self,
        query: &[f32],
        content_type: Option<&str>,
        limit: usize,
    ) -> Result<Vec<EmbeddingRecord>> {
        let query_text = vector_to_text(query);

        let mut records = Vec::new();
        if let Some(content_type) = content_type {
            let mut stmt = self.conn.prepare(
                "SELECT id, content_type, content_id, text, model, dimension, embedding, created_at, updated_at,
                        vec_distance_cosine(embedding, ?1) AS distance
                 FROM embeddings
                 WHERE content_type = ?2
                 ORDER BY distance ASC
                 LIMIT ?3",
            )?;
            let rows = stmt.query_map(
                params![query_text, content_type, limit as i64],
                record_with_distance_from_row,
            )?;
            for row in rows {
                records.push(row??);
            }
        } else {
            let mut stmt = self.conn.prepare(
                "SELECT id, content_type, content_id, text, model, dimension, embedding, created_at, updated_at,
                        vec_distance_cosine(embedding, ?1) AS distance
                 FROM embeddings
                 ORDER BY distance ASC
                 LIMIT ?2",
            )?;
            let rows = stmt.query_map(
                params![query_text, limit as i64],
                record_with_distance_from_row,
            )?;
            for row in rows {
                records.push(row??);
            }
        }

        Ok(records)
    }

    /// Count all embedding records
    pub fn count_embeddings(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM embeddings", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Record counts grouped by content_type
    pub fn count_embeddings_by_type(&self) -> Result<Vec<(String, usize)>> {
        let mut stmt = self.conn.prepare(
            "SELECT content_type, COUNT(*) FROM embeddings GROUP BY content_type ORDER BY content_type",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)? as usize))
        })?;

        let mut counts = Vec::new();
        for row in rows {
            counts.push(row?);
        }
        Ok(counts)
    }
}

type RowResult = std::result::Result<Result<EmbeddingRecord>, rusqlite::Error>;

fn record_from_row(row: &Row<'_>) -> RowResult {
    Ok(build_record(row, None))
}

fn record_with_distance_from_row(row: &Row<'_>) -> RowResult {
    let distance: f64 = row.get(9)?;
    Ok(build_record(row, Some(distance)))
}

fn build_record(row: &Row<'_>, distance: Option<f64>) -> Result<EmbeddingRecord> {
    let encoded: String = row.get(6)?;
    let vector = vector_from_text(&encoded)?;

    Ok(EmbeddingRecord {
        id: row.get(0)?,
        content_type: row.get(1)?,
        content_id: row.get(2)?,
        text: row.get(3)?,
        model: row.get(4)?,
        dimension: row.get::<_, i64>(5)? as usize,
        vector,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
        distance,
    })
}
