//! Similar command

use crate::app::{OutputFormat, SimilarArgs};
use crate::output::format_similar_record;
use anyhow::Result;
use jana_core::{Database, JanaConfig};

pub async fn run(
    args: SimilarArgs,
    config: &JanaConfig,
    db: Database,
    format: OutputFormat,
) -> Result<()> {
    let store = super::embedding_store(config, db)?;

    let limit = args.limit.unwrap_or(config.embedding.similarity.max_results);
    let min_score = config.embedding.similarity.min_score as f64;

    let results = store
        .find_similar_by_text(&args.query, args.content_type.as_deref(), limit)
        .await?;

    // min_score is presentation policy; --all bypasses it
    let shown: Vec<_> = results
        .into_iter()
        .filter(|r| args.all || r.similarity().unwrap_or_default() >= min_score)
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&shown)?),
        OutputFormat::Cli => {
            if shown.is_empty() {
                println!("No similar records found.");
            } else {
                for record in &shown {
                    println!("{}", format_similar_record(record));
                }
            }
        }
    }

    Ok(())
}
