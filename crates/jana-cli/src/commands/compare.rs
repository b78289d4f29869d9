//! Compare command

use crate::app::CompareArgs;
use anyhow::Result;
use jana_core::{EmbeddingService, JanaConfig};

pub async fn run(args: CompareArgs, config: &JanaConfig) -> Result<()> {
    let transformer = jana_core::embedding_transformer_from_config(config)?;
    let service = EmbeddingService::new(transformer);

    let embedding_a = service.generate_embedding(&args.text_a).await?;
    let embedding_b = service.generate_embedding(&args.text_b).await?;

    let similarity = service.calculate_similarity(&embedding_a, &embedding_b);

    println!("Model:      {}", service.model());
    println!("Dimension:  {}", service.dimension());
    println!("Similarity: {:.4}", similarity);

    Ok(())
}
