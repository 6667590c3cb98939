//! Telegram transport: dispatcher setup and shared handler state

pub mod articles;
pub mod handlers;
pub mod paging;

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::Message;
use tracing::{error, info};
use url::Url;

use crate::config::{parse_url, Config};
use crate::content::ContentManager;
use crate::utils::error::ConfigError;
use crate::utils::AppError;

/// Read-only values the handlers need, checked once at startup.
#[derive(Debug, Clone)]
pub struct BotSettings {
    pub page_size: usize,
    pub cache_time: u32,
    pub max_code_chars: usize,
    pub project_name: String,
    pub project_url: String,
    pub description: String,
    pub blob_base_url: String,
    pub install_command: String,
    pub thumbnail_url: Url,
    pub banner_url: String,
}

impl BotSettings {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let project = &config.project;
        Ok(Self {
            page_size: config.bot.page_size,
            cache_time: config.bot.cache_time,
            max_code_chars: config.bot.max_code_chars,
            project_name: project.name.clone(),
            project_url: project.url.clone(),
            description: project.description.clone(),
            blob_base_url: project.blob_base_url.clone(),
            install_command: project.install_command.clone(),
            thumbnail_url: parse_url("project.thumbnail_url", &project.thumbnail_url)?,
            banner_url: project.banner_url.clone(),
        })
    }
}

/// Connects to Telegram and serves updates until Ctrl-C.
pub async fn run(config: &Config) -> Result<(), AppError> {
    let token = config.require_token()?;
    let settings = Arc::new(BotSettings::from_config(config)?);
    let manager = ContentManager::from_config(&config.content)?;

    info!("Serving content from {}", manager.loader().base_dir().display());

    let bot = Bot::new(token);

    // Verify bot token
    match bot.get_me().await {
        Ok(me) => info!("Bot authenticated as: @{}", me.username()),
        Err(e) => {
            error!("Failed to authenticate bot: {}", e);
            return Err(e.into());
        }
    }

    // Polling and a registered webhook are mutually exclusive.
    bot.delete_webhook().await?;

    let inline_query_handler = Update::filter_inline_query().endpoint(handlers::handle_inline_query);

    let start_handler = Update::filter_message()
        .filter(|msg: Message| handlers::is_start_command(&msg))
        .endpoint(handlers::handle_start);

    let all_handlers = dptree::entry()
        .branch(inline_query_handler)
        .branch(start_handler);

    info!("Starting dispatcher in polling mode");
    Dispatcher::builder(bot, all_handlers)
        .dependencies(dptree::deps![manager, settings])
        .default_handler(|_update| async {})
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Bot stopped");
    Ok(())
}
