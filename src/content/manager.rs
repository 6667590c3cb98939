// src/content/manager.rs
use crate::config::ContentConfig;
use crate::content::loader::ContentLoader;
use crate::extractors::{parse_categories, search_items, CatalogEntry, SectionExtractor};
use crate::utils::AppError;

/// Turns the guide README into a searchable catalog.
///
/// Nothing is cached: every call re-reads the README and re-parses it, so
/// edits to the content checkout show up on the next query.
#[derive(Debug, Clone)]
pub struct ContentManager {
    loader: ContentLoader,
    readme: String,
    section: SectionExtractor,
}

impl ContentManager {
    pub fn new(loader: ContentLoader, readme: &str, section: SectionExtractor) -> Self {
        Self {
            loader,
            readme: readme.to_string(),
            section,
        }
    }

    pub fn from_config(config: &ContentConfig) -> Result<Self, AppError> {
        let section = SectionExtractor::new(&config.section_start, &config.section_end)?;
        Ok(Self::new(ContentLoader::new(&config.base_dir), &config.readme, section))
    }

    pub fn loader(&self) -> &ContentLoader {
        &self.loader
    }

    pub async fn read_file(&self, relative_path: &str) -> Result<String, AppError> {
        Ok(self.loader.read_file(relative_path).await?)
    }

    /// Reads the README, cuts out the guide section and parses it.
    pub async fn get_categories(&self) -> Result<Vec<CatalogEntry>, AppError> {
        let content = self.loader.read_file(&self.readme).await?;
        let guide = self.section.extract(&content)?;
        Ok(parse_categories(&guide))
    }

    pub async fn search_items(&self, query: &str) -> Result<Vec<CatalogEntry>, AppError> {
        let items = self.get_categories().await?;
        let found = search_items(items, query);
        tracing::debug!("Query {:?} matched {} items", query, found.len());
        Ok(found)
    }
}
