// src/extractors/search.rs
use crate::extractors::catalog::CatalogEntry;

/// Keeps entries whose name or category contains `query`, ignoring case.
/// An empty query keeps everything. Catalog order is preserved.
pub fn search_items(catalog: Vec<CatalogEntry>, query: &str) -> Vec<CatalogEntry> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return catalog;
    }

    catalog
        .into_iter()
        .filter(|entry| {
            entry.item_name.to_lowercase().contains(&needle)
                || entry.category.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new("Wallet", "Create Wallet", "wallet/create.py"),
            CatalogEntry::new("Jettons • Mint", "Mint Jetton", "jetton/mint.py"),
            CatalogEntry::new("NFT", "Transfer NFT", "nft/transfer.py"),
            CatalogEntry::new("Wallet • Transfers", "Send TON", "wallet/send.py"),
        ]
    }

    fn names(entries: &[CatalogEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.item_name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        assert_eq!(search_items(catalog(), ""), catalog());
    }

    #[test]
    fn test_matches_name_case_insensitively() {
        let found = search_items(catalog(), "tRaNsFeR nft");
        assert_eq!(names(&found), vec!["Transfer NFT"]);
    }

    #[test]
    fn test_matches_category_independently() {
        // "Send TON" only matches through its category.
        let found = search_items(catalog(), "wallet");
        assert_eq!(names(&found), vec!["Create Wallet", "Send TON"]);
    }

    #[test]
    fn test_matches_either_field() {
        let found = search_items(catalog(), "transfer");
        assert_eq!(names(&found), vec!["Transfer NFT", "Send TON"]);
    }

    #[test]
    fn test_no_match() {
        assert!(search_items(catalog(), "dns").is_empty());
    }
}
