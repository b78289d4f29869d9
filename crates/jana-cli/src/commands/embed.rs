//! Embed command

use crate::app::{EmbedArgs, OutputFormat};
use crate::output::format_record;
use anyhow::Result;
use jana_core::{Database, JanaConfig};

pub async fn run(
    args: EmbedArgs,
    config: &JanaConfig,
    db: Database,
    format: OutputFormat,
) -> Result<()> {
    let store = super::embedding_store(config, db)?;

    let record = store
        .store_embedding(&args.text, &args.content_type, args.content_id.as_deref())
        .await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
        OutputFormat::Cli => {
            println!("Stored {}", format_record(&record));
        }
    }

    Ok(())
}
