//! Configuration management
//!
//! Environment-driven settings with an optional YAML file. Every option has
//! a default, so a missing config file is not an error. The per-transformer
//! views (`ChatTransformerConfig`, `EmbeddingTransformerConfig`) are built
//! here once and handed to constructors; transformers never read the
//! environment themselves.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct JanaConfig {
    /// Chat LLM settings
    #[serde(default)]
    pub llm: LlmConfig,

    /// Embedding settings
    #[serde(default)]
    pub embedding: EmbeddingConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which chat provider to use, selected at construction time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatProvider {
    Local,
    Openai,
}

impl Default for ChatProvider {
    fn default() -> Self {
        default_chat_provider()
    }
}

/// Chat LLM configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Provider selector ('local' or 'openai')
    #[serde(default = "default_chat_provider")]
    pub provider: ChatProvider,

    /// Local (OpenAI-compatible) server settings
    #[serde(default)]
    pub local: LocalLlmConfig,

    /// OpenAI settings
    #[serde(default)]
    pub openai: OpenAiLlmConfig,

    /// System message prepended to every conversation
    #[serde(default = "default_system_message")]
    pub system_message: String,

    /// Maximum history entries sent with a chat request
    #[serde(default = "default_max_history")]
    pub max_history: usize,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_chat_provider(),
            local: LocalLlmConfig::default(),
            openai: OpenAiLlmConfig::default(),
            system_message: default_system_message(),
            max_history: default_max_history(),
        }
    }
}

/// Local LLM server settings (LM Studio, llama.cpp server, etc.)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalLlmConfig {
    #[serde(default = "default_local_base_url")]
    pub base_url: String,

    #[serde(default = "default_chat_endpoint")]
    pub endpoint: String,
}

impl Default for LocalLlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_local_base_url(),
            endpoint: default_chat_endpoint(),
        }
    }
}

/// OpenAI chat settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiLlmConfig {
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,

    /// API key; required when the openai provider is selected
    #[serde(default = "default_openai_api_key")]
    pub api_key: Option<String>,

    #[serde(default = "default_openai_model")]
    pub model: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_chat_endpoint")]
    pub endpoint: String,
}

impl Default for OpenAiLlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_openai_base_url(),
            api_key: default_openai_api_key(),
            model: default_openai_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            endpoint: default_chat_endpoint(),
        }
    }
}

/// Which embedding provider to use (only OpenAI is supported)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingProvider {
    #[default]
    Openai,
}

/// Embedding configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EmbeddingConfig {
    #[serde(default)]
    pub provider: EmbeddingProvider,

    #[serde(default)]
    pub openai: OpenAiEmbeddingConfig,

    #[serde(default)]
    pub similarity: SimilarityConfig,
}

/// OpenAI embedding settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiEmbeddingConfig {
    #[serde(default = "default_embedding_model")]
    pub model: String,

    /// Configured dimension; the transformer's per-model table is
    /// authoritative at generation time
    #[serde(default = "default_embedding_dimension")]
    pub dimension: usize,
}

impl Default for OpenAiEmbeddingConfig {
    fn default() -> Self {
        Self {
            model: default_embedding_model(),
            dimension: default_embedding_dimension(),
        }
    }
}

/// Similarity search thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityConfig {
    /// Minimum similarity score for a result to be shown
    #[serde(default = "default_min_score")]
    pub min_score: f32,

    /// Default number of results returned
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
            max_results: default_max_results(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub llm: LlmLogConfig,
}

/// LLM request/response logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmLogConfig {
    #[serde(default = "default_llm_logging_enabled")]
    pub enabled: bool,

    /// Message content longer than this is truncated before logging
    #[serde(default = "default_llm_log_truncate")]
    pub truncate_length: usize,
}

impl Default for LlmLogConfig {
    fn default() -> Self {
        Self {
            enabled: default_llm_logging_enabled(),
            truncate_length: default_llm_log_truncate(),
        }
    }
}

/// Immutable settings handed to a chat transformer at construction.
///
/// Enumerates everything a transformer is allowed to know; there are no
/// other configuration lookups inside the transformers.
#[derive(Debug, Clone)]
pub struct ChatTransformerConfig {
    pub base_url: String,
    pub endpoint: String,
    /// Model id sent in the payload; local servers pick their loaded model
    pub model: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub api_key: Option<String>,
    pub system_message: Option<String>,
}

/// Immutable settings handed to an embedding transformer at construction
#[derive(Debug, Clone)]
pub struct EmbeddingTransformerConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
}

impl JanaConfig {
    /// Load config from default path
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: JanaConfig = serde_yaml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(JanaConfig::default())
        }
    }

    /// Save config to default path
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Build the transformer view for the selected chat provider
    pub fn chat_transformer_config(&self) -> ChatTransformerConfig {
        match self.llm.provider {
            ChatProvider::Local => ChatTransformerConfig {
                base_url: self.llm.local.base_url.clone(),
                endpoint: self.llm.local.endpoint.clone(),
                model: None,
                max_tokens: default_max_tokens(),
                temperature: default_temperature(),
                api_key: None,
                system_message: Some(self.llm.system_message.clone()),
            },
            ChatProvider::Openai => ChatTransformerConfig {
                base_url: self.llm.openai.base_url.clone(),
                endpoint: self.llm.openai.endpoint.clone(),
                model: Some(self.llm.openai.model.clone()),
                max_tokens: self.llm.openai.max_tokens,
                temperature: self.llm.openai.temperature,
                api_key: self.llm.openai.api_key.clone(),
                system_message: Some(self.llm.system_message.clone()),
            },
        }
    }

    /// Build the transformer view for the embedding provider
    pub fn embedding_transformer_config(&self) -> EmbeddingTransformerConfig {
        EmbeddingTransformerConfig {
            base_url: self.llm.openai.base_url.clone(),
            model: self.embedding.openai.model.clone(),
            api_key: self.llm.openai.api_key.clone(),
        }
    }
}

fn env_or(key: &str, fallback: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| fallback.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

fn default_chat_provider() -> ChatProvider {
    match std::env::var("LLM_PROVIDER").as_deref() {
        Ok("openai") => ChatProvider::Openai,
        _ => ChatProvider::Local,
    }
}

fn default_local_base_url() -> String {
    env_or("LLM_BASE_URL", "http://localhost:1234")
}

fn default_chat_endpoint() -> String {
    env_or("LLM_ENDPOINT", "/v1/chat/completions")
}

fn default_openai_base_url() -> String {
    env_or("OPENAI_BASE_URL", "https://api.openai.com")
}

fn default_openai_api_key() -> Option<String> {
    std::env::var("OPENAI_API_KEY").ok()
}

fn default_openai_model() -> String {
    env_or("OPENAI_MODEL", "gpt-3.5-turbo")
}

fn default_max_tokens() -> u32 {
    env_parse("OPENAI_MAX_TOKENS").unwrap_or(500)
}

fn default_temperature() -> f32 {
    env_parse("OPENAI_TEMPERATURE").unwrap_or(0.7)
}

fn default_system_message() -> String {
    env_or(
        "LLM_SYSTEM_MESSAGE",
        "You are Jana, a helpful personal assistant for people with ADHD.",
    )
}

fn default_max_history() -> usize {
    env_parse("LLM_MAX_HISTORY").unwrap_or(10)
}

fn default_embedding_model() -> String {
    env_or("OPENAI_EMBEDDING_MODEL", "text-embedding-3-large")
}

fn default_embedding_dimension() -> usize {
    env_parse("OPENAI_EMBEDDING_DIMENSION").unwrap_or(3072)
}

fn default_min_score() -> f32 {
    env_parse("EMBEDDING_MIN_SIMILARITY").unwrap_or(0.7)
}

fn default_max_results() -> usize {
    env_parse("EMBEDDING_MAX_RESULTS").unwrap_or(5)
}

fn default_llm_logging_enabled() -> bool {
    match std::env::var("JANA_LLM_LOGGING_ENABLED").as_deref() {
        Ok("false") | Ok("0") => false,
        _ => true,
    }
}

fn default_llm_log_truncate() -> usize {
    env_parse("JANA_LLM_LOG_TRUNCATE").unwrap_or(500)
}
