//! Error types for TubeTalk.

use thiserror::Error;

/// Library-level error type for TubeTalk operations.
#[derive(Error, Debug)]
pub enum TubeTalkError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing configuration: {0}. Set them in the environment or the config file.")]
    ConfigurationMissing(String),

    #[error("Subtitles unavailable: {0}")]
    SubtitleUnavailable(String),

    #[error("Indexing failed with code {status}, reason {reason}, text {body}")]
    IndexingFailed {
        status: u16,
        reason: String,
        body: String,
    },

    #[error("Query failed with code {status}, reason {reason}, text {body}")]
    QueryFailed {
        status: u16,
        reason: String,
        body: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("External tool not found: {0}. Please install it and ensure it's in your PATH.")]
    ToolNotFound(String),

    #[error("External tool failed: {0}")]
    ToolFailed(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for TubeTalk operations.
pub type Result<T> = std::result::Result<T, TubeTalkError>;
