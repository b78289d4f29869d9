//! Jana CLI
//!
//! Chat with an LLM and keep a searchable store of text embeddings.

use anyhow::Result;
use clap::Parser;
use jana_core::{Database, JanaConfig};

mod app;
mod commands;
mod output;

use app::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = JanaConfig::load()?;

    // Open database (use JANA_DB env var if set, otherwise use default)
    let db_path = std::env::var("JANA_DB")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| Database::default_path());
    let db = Database::open(&db_path)?;
    db.initialize()?;

    match cli.command {
        Commands::Chat(args) => commands::chat::run(args, &config).await,
        Commands::Embed(args) => commands::embed::run(args, &config, db, cli.format).await,
        Commands::Similar(args) => commands::similar::run(args, &config, db, cli.format).await,
        Commands::Compare(args) => commands::compare::run(args, &config).await,
        Commands::ProviderTest => commands::provider_test::run(&config).await,
        Commands::Status => commands::status::run(&db_path, &db, cli.format),
    }
}
