// src/bot/articles.rs
use sha2::{Digest, Sha256};
use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, InlineQueryResult, InlineQueryResultArticle,
    InputMessageContent, InputMessageContentText, LinkPreviewOptions, ParseMode,
};
use teloxide::utils::html;
use url::Url;

use crate::bot::BotSettings;
use crate::content::ContentManager;
use crate::extractors::CatalogEntry;
use crate::utils::html::truncate_chars;
use crate::utils::AppError;

/// Stable result id: hex SHA-256 over name, category and link.
/// 64 characters, which is exactly Telegram's limit.
pub fn result_id(entry: &CatalogEntry) -> String {
    let mut hasher = Sha256::new();
    hasher.update(entry.item_name.as_bytes());
    hasher.update(entry.category.as_bytes());
    hasher.update(entry.item_link.as_bytes());
    hex::encode(hasher.finalize())
}

/// HTML body sent to the chat when a result is picked.
pub fn message_text(settings: &BotSettings, entry: &CatalogEntry, code: &str) -> String {
    let code = truncate_chars(code, settings.max_code_chars);

    let mut text = String::new();
    text.push_str(&html::link(&settings.project_url, &html::escape(&settings.project_name)));
    text.push_str("\n\n");
    text.push_str(&format!("🏷 {}\n", html::bold(&html::escape(&entry.item_name))));
    text.push_str(&html::escape(&entry.category));
    text.push_str("\n\n");
    text.push_str(&format!("📦 {}\n", html::bold("Installation:")));
    text.push_str("Install the required library:\n");
    text.push_str(&html::code_block(&settings.install_command));
    text.push_str("\n\n");
    text.push_str(&format!("📋 {}\n", html::bold("Code example:")));
    text.push_str("Replace the constants with your own:\n");
    text.push_str(&html::code_block(&code));
    text
}

/// Where the linked file can be viewed online. `None` when the joined
/// string is not a valid URL.
pub fn source_url(blob_base_url: &str, item_link: &str) -> Option<Url> {
    let raw = format!("{}{}", blob_base_url, item_link);
    match Url::parse(&raw) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::warn!("Invalid source URL '{}': {}", raw, e);
            None
        }
    }
}

fn source_keyboard(url: Url) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::url("🌐 Open in GitHub", url)]])
}

/// Builds the inline result for one catalog entry, reading the linked
/// code example through the content manager.
pub async fn create_article(
    settings: &BotSettings,
    manager: &ContentManager,
    entry: &CatalogEntry,
) -> Result<InlineQueryResult, AppError> {
    let code = manager.read_file(&entry.item_link).await?;

    let mut content = InputMessageContentText::new(message_text(settings, entry, &code));
    content.parse_mode = Some(ParseMode::Html);
    content.link_preview_options = Some(LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    });

    let mut article = InlineQueryResultArticle::new(
        result_id(entry),
        entry.item_name.clone(),
        InputMessageContent::Text(content),
    );
    article.description = Some(entry.category.clone());
    article.thumbnail_url = Some(settings.thumbnail_url.clone());
    article.reply_markup = source_url(&settings.blob_base_url, &entry.item_link).map(source_keyboard);

    Ok(InlineQueryResult::Article(article))
}
