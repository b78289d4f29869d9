//! Jana Core Library
//!
//! Core functionality for the jana personal assistant.
//!
//! # Features
//! - Chat completions against a local OpenAI-compatible server or OpenAI
//! - Text embeddings via the OpenAI embeddings API
//! - Cosine similarity and in-memory ranking
//! - SQLite persistence with an engine-side vector-distance operator

pub mod chat;
pub mod config;
pub mod db;
pub mod embedding;
pub mod error;
pub mod llm;

pub use chat::ChatService;
pub use config::{
    ChatProvider, ChatTransformerConfig, EmbeddingProvider, EmbeddingTransformerConfig,
    JanaConfig, LlmLogConfig, SimilarityConfig,
};
pub use db::{vector_from_text, vector_to_text, Database, EmbeddingRecord};
pub use embedding::{
    cosine_similarity, EmbeddingCandidate, EmbeddingService, EmbeddingStore, SimilarityMatch,
};
pub use error::{Error, JanaError, Result};
pub use llm::{
    chat_transformer_from_config, embedding_transformer_from_config, ChatContext, ChatMessage,
    ChatTransformer, EmbeddingTransformer, LlmClient, LlmLogger, LocalChatTransformer,
    OpenAiChatTransformer, OpenAiEmbeddingTransformer,
};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "jana";

/// Default data directory name
pub const DATA_DIR_NAME: &str = "jana";
