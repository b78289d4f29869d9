//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "jana")]
#[command(
    author,
    version,
    about = "Personal assistant: chat with an LLM and search stored text embeddings"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Chat with the configured assistant
    Chat(ChatArgs),

    /// Generate and store an embedding for a text
    Embed(EmbedArgs),

    /// Find stored texts similar to a query
    Similar(SimilarArgs),

    /// Compare two texts by embedding similarity
    Compare(CompareArgs),

    /// Check connectivity to the configured providers
    ProviderTest,

    /// Show database status
    Status,
}

#[derive(Args)]
pub struct ChatArgs {
    /// Message to send; omit for an interactive session
    pub message: Option<String>,

    /// Override the configured system message
    #[arg(long)]
    pub system: Option<String>,
}

#[derive(Args)]
pub struct EmbedArgs {
    /// Text to embed
    pub text: String,

    /// Content type tag for the record
    #[arg(long, default_value = "note")]
    pub content_type: String,

    /// Reference to the owning entity
    #[arg(long)]
    pub content_id: Option<String>,
}

#[derive(Args)]
pub struct SimilarArgs {
    /// Query text
    pub query: String,

    /// Restrict results to one content type
    #[arg(long)]
    pub content_type: Option<String>,

    /// Maximum number of results (defaults to the configured max_results)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Include results below the configured minimum similarity
    #[arg(long)]
    pub all: bool,
}

#[derive(Args)]
pub struct CompareArgs {
    /// First text
    pub text_a: String,

    /// Second text
    pub text_b: String,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
}
