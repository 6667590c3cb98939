// src/extractors/mod.rs
pub mod catalog;
pub mod search;
pub mod section;

// Re-export key extraction types for convenience
pub use catalog::{parse_categories, CatalogEntry};
pub use search::search_items;
pub use section::{extract_section, SectionExtractor};
