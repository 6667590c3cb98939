// src/extractors/catalog.rs
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// --- Regex Patterns (Lazy Static) ---
// All patterns are prefix matches against a single line.
static CATEGORY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#### (.+)").expect("Failed to compile CATEGORY_RE")
});

static SUBCATEGORY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^- ##### (.+)").expect("Failed to compile SUBCATEGORY_RE")
});

static SUBCATEGORY_ITEM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ {2}- \[([^\]]+)\]\(([^)]+)\)").expect("Failed to compile SUBCATEGORY_ITEM_RE")
});

static ITEM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^- \[([^\]]+)\]\(([^)]+)\)").expect("Failed to compile ITEM_RE")
});

/// Separator between a heading and its subheading in a composed category.
pub const CATEGORY_SEPARATOR: &str = " • ";

// --- Data Structures ---
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub category: String,  // e.g., "Wallet • Transfers"
    pub item_name: String, // Link label
    pub item_link: String, // Path relative to the content base directory
}

impl CatalogEntry {
    pub fn new(category: impl Into<String>, item_name: impl Into<String>, item_link: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            item_name: item_name.into(),
            item_link: item_link.into(),
        }
    }
}

/// Parses a guide section into a flat, ordered catalog.
///
/// Recognized lines:
/// - `#### Name` starts a category and clears the subcategory;
/// - `- ##### Name` sets the subcategory under the current category;
/// - `- [name](link)`, optionally indented by two spaces, emits an entry.
///
/// Everything else is skipped, so this never fails. A link seen before any
/// `####` heading gets an empty category, and a subheading seen before any
/// heading composes as `" • Sub"`. Callers that need a non-empty category
/// must check for it themselves.
pub fn parse_categories(section: &str) -> Vec<CatalogEntry> {
    let mut items = Vec::new();
    let mut current_category = String::new();
    let mut current_subcategory: Option<String> = None;

    for line in section.split('\n') {
        if let Some(caps) = CATEGORY_RE.captures(line) {
            current_category = caps[1].trim().to_string();
            current_subcategory = None;
        } else if let Some(caps) = SUBCATEGORY_RE.captures(line) {
            current_subcategory = Some(caps[1].trim().to_string());
        } else if let Some(caps) = SUBCATEGORY_ITEM_RE
            .captures(line)
            .or_else(|| ITEM_RE.captures(line))
        {
            let category = compose_category(&current_category, current_subcategory.as_deref());
            items.push(CatalogEntry::new(category, &caps[1], &caps[2]));
        } else {
            tracing::trace!("Skipping line: {:?}", line);
        }
    }

    tracing::debug!("Parsed {} catalog entries", items.len());
    items
}

fn compose_category(category: &str, subcategory: Option<&str>) -> String {
    match subcategory {
        Some(sub) if !sub.is_empty() => format!("{}{}{}", category, CATEGORY_SEPARATOR, sub),
        _ => category.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(entries: &[CatalogEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.category.as_str()).collect()
    }

    #[test]
    fn test_heading_then_subheading() {
        let section = "#### A\n- [n1](l1)\n- [n2](l2)\n- ##### B\n  - [n3](l3)";
        let entries = parse_categories(section);
        assert_eq!(
            entries,
            vec![
                CatalogEntry::new("A", "n1", "l1"),
                CatalogEntry::new("A", "n2", "l2"),
                CatalogEntry::new("A • B", "n3", "l3"),
            ]
        );
    }

    #[test]
    fn test_new_heading_clears_subheading() {
        let section = "#### A\n- ##### B\n  - [x](x.py)\n#### C\n- [y](y.py)";
        assert_eq!(categories(&parse_categories(section)), vec!["A • B", "C"]);
    }

    #[test]
    fn test_links_without_headings_have_empty_category() {
        let section = "- [first](1.py)\n- [second](2.py)\n  - [third](3.py)";
        let entries = parse_categories(section);
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.category.is_empty()));
        let names: Vec<_> = entries.iter().map(|e| e.item_name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_subheading_without_heading() {
        let entries = parse_categories("- ##### Orphan\n  - [x](x.py)");
        assert_eq!(categories(&entries), vec![" • Orphan"]);
    }

    #[test]
    fn test_unindented_link_keeps_active_subheading() {
        let entries = parse_categories("#### A\n- ##### B\n- [x](x.py)");
        assert_eq!(categories(&entries), vec!["A • B"]);
    }

    #[test]
    fn test_headings_are_trimmed() {
        let entries = parse_categories("#### Jettons  \r\n- ##### Mint \r\n  - [Mint](mint.py)");
        assert_eq!(entries[0].category, "Jettons • Mint");
    }

    #[test]
    fn test_unrecognized_lines_are_skipped() {
        let section = "Some prose.\n##### Five hashes\n#### Real\n* [star](s.py)\n- [no link]\n    - [deep](d.py)\n- [ok](ok.py)\n";
        let entries = parse_categories(section);
        assert_eq!(entries, vec![CatalogEntry::new("Real", "ok", "ok.py")]);
    }

    #[test]
    fn test_link_keeps_path_verbatim() {
        let entries = parse_categories("#### NFT\n- [Mint NFT](examples/nft/mint nft.py)");
        assert_eq!(entries[0].item_link, "examples/nft/mint nft.py");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_categories("").is_empty());
    }
}
