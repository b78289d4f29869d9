//! Error types for jana

use thiserror::Error;

/// Result type alias using JanaError
pub type Result<T> = std::result::Result<T, JanaError>;

/// Error type alias for convenience
pub type Error = JanaError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const PROVIDER_UNAVAILABLE: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for jana
///
/// Provider failures are split into three variants so callers can tell
/// "could not reach the server" from "the server answered with an error"
/// from "the answer did not have the expected shape".
#[derive(Debug, Error)]
pub enum JanaError {
    #[error("failed to reach LLM service: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("LLM service error (HTTP {status}): {body}")]
    Provider { status: u16, body: String },

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl JanaError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Transport(_) | Self::Provider { .. } | Self::MalformedResponse(_) => {
                exit_codes::PROVIDER_UNAVAILABLE
            }
            Self::Config(_) | Self::InvalidInput(_) => exit_codes::INVALID_INPUT,
            _ => exit_codes::GENERAL_ERROR,
        }
    }

    /// True if the failure happened before, at, or inside the provider,
    /// as opposed to a local error (database, IO, config).
    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Provider { .. } | Self::MalformedResponse(_)
        )
    }
}
