// src/utils/html.rs
//! Telegram HTML helpers missing from `teloxide::utils::html`.

use teloxide::utils::html::escape;

/// A link with a zero-width body: invisible in the message, but Telegram
/// still renders the preview for `url`.
pub fn hide_link(url: &str) -> String {
    format!("<a href=\"{}\">&#8203;</a>", escape(url))
}

/// Cuts `text` to at most `max_chars` characters, appending `…` when
/// anything was dropped. Always splits on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => {
            let mut cut = text[..byte_idx].to_string();
            cut.push('…');
            cut
        }
        None => text.to_string(),
    }
}
