//! Configuration management for the guide bot

use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

use crate::utils::error::ConfigError;

/// Upper bound for `bot.max_code_chars`. Telegram rejects messages over
/// 4096 characters and the header around the code takes the rest.
pub const MAX_CODE_CHARS_LIMIT: usize = 3500;

/// Complete bot configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bot token from BotFather
    pub bot_token: Option<String>,
    pub content: ContentConfig,
    pub bot: BotConfig,
    pub project: ProjectConfig,
    pub logging: LoggingConfig,
}

/// Where the README and the example files live
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Checkout of the companion repository; every link is relative to it
    pub base_dir: PathBuf,
    /// README path relative to `base_dir`
    pub readme: String,
    /// Literal line that opens the guide section
    pub section_start: String,
    /// Literal line that closes the guide section
    pub section_end: String,
}

/// Inline query answering
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Results per inline query page (Telegram allows at most 50)
    pub page_size: usize,
    /// Seconds Telegram may cache an answer
    pub cache_time: u32,
    /// Code examples longer than this are cut
    pub max_code_chars: usize,
}

/// How results describe and link the project
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: String,
    pub url: String,
    /// One line shown in the /start greeting
    pub description: String,
    /// Prefix joined with an item link to view it online
    pub blob_base_url: String,
    pub install_command: String,
    pub thumbnail_url: String,
    /// Image previewed under the /start greeting
    pub banner_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory for `bot.log`; no file logging when unset
    pub logs_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads `path` when it exists, otherwise falls back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn require_token(&self) -> Result<&str, ConfigError> {
        match self.bot_token.as_deref() {
            Some(token) if !token.trim().is_empty() => Ok(token),
            _ => Err(ConfigError::MissingToken),
        }
    }

    /// Checks values the bot would otherwise only trip over mid-request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot.page_size == 0 || self.bot.page_size > 50 {
            return Err(ConfigError::InvalidValue {
                field: "bot.page_size",
                reason: format!("must be between 1 and 50, got {}", self.bot.page_size),
            });
        }
        if self.bot.max_code_chars == 0 || self.bot.max_code_chars > MAX_CODE_CHARS_LIMIT {
            return Err(ConfigError::InvalidValue {
                field: "bot.max_code_chars",
                reason: format!(
                    "must be between 1 and {}, got {}",
                    MAX_CODE_CHARS_LIMIT, self.bot.max_code_chars
                ),
            });
        }
        parse_url("project.url", &self.project.url)?;
        parse_url("project.blob_base_url", &self.project.blob_base_url)?;
        parse_url("project.thumbnail_url", &self.project.thumbnail_url)?;
        parse_url("project.banner_url", &self.project.banner_url)?;
        Ok(())
    }
}

pub(crate) fn parse_url(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|_| ConfigError::InvalidUrl {
        field,
        value: value.to_string(),
    })
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("tonutils"),
            readme: "README.md".to_string(),
            section_start: "### Guide".to_string(),
            section_end: "## Contribution".to_string(),
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            cache_time: 600,
            max_code_chars: 3000,
        }
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "Tonutils".to_string(),
            url: "https://github.com/nessshon/tonutils".to_string(),
            description: "I can assist you in finding code examples on Python for various operations related to the TON blockchain.".to_string(),
            blob_base_url: "https://github.com/nessshon/tonutils/blob/main/".to_string(),
            install_command: "pip install tonutils".to_string(),
            thumbnail_url: "https://telegra.ph//file/063ee61e097ee8281b9d3.jpg".to_string(),
            banner_url: "https://telegra.ph//file/068ea06087c9ce8c6bfed.jpg".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            logs_dir: Some(PathBuf::from(".logs")),
        }
    }
}
