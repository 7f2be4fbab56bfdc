use std::collections::HashSet;

use crate::catalog::CatalogStore;

/// Distinct, non-empty catalog titles in first-occurrence order
pub fn list_catalog_titles(store: &CatalogStore) -> Vec<&str> {
    let mut seen = HashSet::new();
    store
        .books()
        .iter()
        .map(|book| book.title.as_str())
        .filter(|title| !title.is_empty() && seen.insert(*title))
        .collect()
}

/// Resolves free-text search into an exact catalog title
///
/// Case-insensitive substring match; the first matching title in catalog
/// order wins. A blank query matches nothing.
pub fn find_title_by_substring<'a>(store: &'a CatalogStore, query: &str) -> Option<&'a str> {
    if query.trim().is_empty() {
        return None;
    }
    let needle = query.to_lowercase();
    list_catalog_titles(store)
        .into_iter()
        .find(|title| title.to_lowercase().contains(&needle))
}
