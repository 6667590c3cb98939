// src/bot/paging.rs
//! Offset-based paging for inline query answers.
//!
//! Telegram echoes back the `next_offset` of the previous answer when the
//! user scrolls; an empty `next_offset` tells it there is nothing more.

/// Parses the offset Telegram sent. Empty means the first page; anything
/// unparsable restarts from the beginning.
pub fn parse_offset(raw: &str) -> usize {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0;
    }
    raw.parse().unwrap_or_else(|_| {
        tracing::warn!("Ignoring invalid inline query offset {:?}", raw);
        0
    })
}

#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// Offset for the following page, or empty when this is the last one
    pub next_offset: String,
}

pub fn paginate<T>(items: &[T], offset: usize, page_size: usize) -> Page<'_, T> {
    let start = offset.min(items.len());
    let end = offset.saturating_add(page_size).min(items.len());
    let next_offset = if end < items.len() {
        end.to_string()
    } else {
        String::new()
    };

    Page {
        items: &items[start..end],
        next_offset,
    }
}
