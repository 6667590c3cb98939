//! Update handlers: inline search and the /start greeting

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, InlineQuery, InlineQueryResult, Message, ParseMode,
    ReplyMarkup,
};
use teloxide::utils::html;
use tracing::{debug, info};

use crate::bot::articles::create_article;
use crate::bot::paging::{paginate, parse_offset};
use crate::bot::BotSettings;
use crate::content::ContentManager;
use crate::utils::html::hide_link;
use crate::utils::AppError;

pub type HandlerResult = Result<(), AppError>;

/// Results for one inline query page and the offset of the next page
/// (empty when there is none).
pub type Answer = (Vec<InlineQueryResult>, String);

/// Searches the catalog and renders the page starting at `offset`.
/// A linked file that cannot be read fails the whole page.
pub async fn build_answer(
    manager: &ContentManager,
    settings: &BotSettings,
    query: &str,
    offset: usize,
) -> Result<Answer, AppError> {
    let items = manager.search_items(query).await?;
    let page = paginate(&items, offset, settings.page_size);

    let mut results = Vec::with_capacity(page.items.len());
    for entry in page.items {
        results.push(create_article(settings, manager, entry).await?);
    }

    info!(
        "Answering inline query {:?}: {} of {} results, next offset {:?}",
        query,
        results.len(),
        items.len(),
        page.next_offset
    );
    Ok((results, page.next_offset))
}

/// Handle inline queries (@bot query)
pub async fn handle_inline_query(
    bot: Bot,
    query: InlineQuery,
    manager: ContentManager,
    settings: Arc<BotSettings>,
) -> HandlerResult {
    let offset = parse_offset(&query.offset);
    debug!("Received inline query {:?} at offset {}", query.query, offset);

    let (results, next_offset) = build_answer(&manager, &settings, &query.query, offset).await?;

    let mut req = bot.answer_inline_query(&query.id, results);
    req.cache_time = Some(settings.cache_time);
    req.is_personal = Some(false);
    req.next_offset = Some(next_offset);
    req.await?;

    Ok(())
}

/// Returns the command name of a `/command[@bot] args` message, lowercased.
pub fn command_name(text: &str) -> Option<String> {
    let first = text.split_whitespace().next()?;
    let command = first.strip_prefix('/')?;
    let command = command.split('@').next().unwrap_or_default();
    if command.is_empty() {
        return None;
    }
    Some(command.to_lowercase())
}

pub fn is_start_command(msg: &Message) -> bool {
    msg.text().and_then(command_name).as_deref() == Some("start")
}

pub fn start_text(settings: &BotSettings, full_name: &str) -> String {
    format!(
        "{}👋 Hello, {}! I'm the {} helper bot.\n\n{}\n\n\
         • To get started, simply use inline mode and search for the operations you're interested in.",
        hide_link(&settings.banner_url),
        html::bold(&html::escape(full_name)),
        html::link(&settings.project_url, &html::escape(&settings.project_name)),
        html::escape(&settings.description),
    )
}

pub fn search_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::switch_inline_query_current_chat(
        "🔎 Search",
        "",
    )]])
}

/// Handle the /start command
pub async fn handle_start(bot: Bot, msg: Message, settings: Arc<BotSettings>) -> HandlerResult {
    let full_name = msg.from.as_ref().map(|u| u.full_name()).unwrap_or_default();
    info!("Received /start in chat {}", msg.chat.id.0);

    let mut req = bot.send_message(msg.chat.id, start_text(&settings, &full_name));
    req.parse_mode = Some(ParseMode::Html);
    req.reply_markup = Some(ReplyMarkup::InlineKeyboard(search_keyboard()));
    req.await?;

    Ok(())
}
