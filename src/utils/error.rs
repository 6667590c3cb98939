// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Document is not valid UTF-8: {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Regular expression error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Section not found between '{start}' and '{end}'")]
    SectionNotFound { start: String, end: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Bot token is not set (use --bot-token, BOT_TOKEN or the config file)")]
    MissingToken,

    #[error("Invalid URL for {field}: {value}")]
    InvalidUrl { field: &'static str, value: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Telegram request failed: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
