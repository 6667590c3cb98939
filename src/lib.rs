//! Telegram inline-search bot over the code examples listed in a README.
//!
//! The README's guide section is cut out ([`extractors::section`]), parsed
//! into a flat catalog of `(category, name, link)` entries
//! ([`extractors::catalog`]) and filtered per query
//! ([`extractors::search`]). [`bot`] turns matches into inline results.

pub mod bot;
pub mod config;
pub mod content;
pub mod extractors;
pub mod utils;
