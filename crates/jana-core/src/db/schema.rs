//! Database schema and initialization

use crate::embedding::cosine_similarity;
use crate::error::{JanaError, Result};
use rusqlite::functions::FunctionFlags;
use rusqlite::{params, Connection};
use std::path::Path;

use super::embeddings::vector_from_text;

/// Main database handle
pub struct Database {
    pub(crate) conn: Connection,
}

const SCHEMA_VERSION: i32 = 1;

const CREATE_TABLES: &str = r#"
-- One row per generated embedding; rows are append-only
CREATE TABLE IF NOT EXISTS embeddings (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    content_type TEXT NOT NULL,
    content_id TEXT,
    text TEXT NOT NULL,
    model TEXT NOT NULL,
    dimension INTEGER NOT NULL,
    embedding TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_embeddings_content_type ON embeddings(content_type);
CREATE INDEX IF NOT EXISTS idx_embeddings_content ON embeddings(content_type, content_id);
"#;

impl Database {
    /// Open database at path, creating if necessary
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        register_vector_functions(&conn)?;
        Ok(Self { conn })
    }

    /// Open in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        register_vector_functions(&conn)?;
        Ok(Self { conn })
    }

    /// Initialize database schema
    pub fn initialize(&self) -> Result<()> {
        // Set PRAGMAs for performance
        self.conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA foreign_keys = ON;
             PRAGMA busy_timeout = 5000;",
        )?;

        self.conn.execute_batch(CREATE_TABLES)?;

        self.migrate()?;

        self.conn.execute(
            "INSERT OR REPLACE INTO schema_version (version) VALUES (?1)",
            params![SCHEMA_VERSION],
        )?;

        Ok(())
    }

    /// Get current schema version
    pub fn schema_version(&self) -> Result<Option<i32>> {
        let version = self
            .conn
            .query_row(
                "SELECT version FROM schema_version ORDER BY version DESC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .ok();
        Ok(version)
    }

    /// Run migrations to upgrade schema to current version
    pub fn migrate(&self) -> Result<()> {
        // Version 1 is the initial schema; nothing to upgrade yet
        Ok(())
    }
}

/// Register the vector-distance operator into the connection.
///
/// `vec_distance_cosine(a, b)` takes two vectors in the textual
/// `[0.1,0.2,...]` encoding and returns the cosine distance (1 - cosine
/// similarity), so ORDER BY runs inside the engine like pgvector's `<=>`.
fn register_vector_functions(conn: &Connection) -> Result<()> {
    conn.create_scalar_function(
        "vec_distance_cosine",
        2,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let a: String = ctx.get(0)?;
            let b: String = ctx.get(1)?;
            let va = vector_from_text(&a).map_err(user_function_error)?;
            let vb = vector_from_text(&b).map_err(user_function_error)?;
            Ok(1.0 - cosine_similarity(&va, &vb) as f64)
        },
    )?;
    Ok(())
}

fn user_function_error(e: JanaError) -> rusqlite::Error {
    rusqlite::Error::UserFunctionError(Box::new(e))
}
