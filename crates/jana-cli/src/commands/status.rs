//! Status command

use crate::app::OutputFormat;
use anyhow::Result;
use jana_core::Database;
use serde_json::json;
use std::path::Path;

pub fn run(db_path: &Path, db: &Database, format: OutputFormat) -> Result<()> {
    let total = db.count_embeddings()?;
    let by_type = db.count_embeddings_by_type()?;

    match format {
        OutputFormat::Json => {
            let counts: serde_json::Map<String, serde_json::Value> = by_type
                .into_iter()
                .map(|(content_type, count)| (content_type, json!(count)))
                .collect();
            let status = json!({
                "database": db_path.display().to_string(),
                "embeddings": total,
                "by_content_type": counts,
            });
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        OutputFormat::Cli => {
            println!("Database:    {}", db_path.display());
            println!("Embeddings:  {}", total);
            if !by_type.is_empty() {
                println!();
                for (content_type, count) in by_type {
                    println!("  {:<16} {}", content_type, count);
                }
            }
        }
    }

    Ok(())
}
