//! Search, filter and sort over a catalog listing.
//!
//! `query` is pure: it never mutates the input and always returns a fresh
//! list. Callers keep the current search text and filter themselves (see
//! `CatalogQuery`) and re-run the query whenever either changes.

use super::item::CatalogItem;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::trace;

/// Category value that shows every project, as on the projects page
pub const ALL_FILTER: &str = "All";

/// Items matching `search_text` and `filter`, featured first then by rank.
///
/// Search is a case-insensitive substring match against title, summary and
/// any extra search terms; an empty string matches everything. `filter` is
/// an exact match on the item's filter axis; `None` disables it, as does a
/// value the item type reserves for its unfiltered listing (see
/// `CatalogItem::is_unfiltered`).
/// The sort is stable, so equally ranked items keep their input order.
pub fn query<T>(items: &[T], search_text: &str, filter: Option<&str>) -> Vec<T>
where
    T: CatalogItem + Clone,
{
    let needle = search_text.to_lowercase();
    let filter = filter.filter(|value| !T::is_unfiltered(value));

    let mut matched: Vec<T> = items
        .iter()
        .filter(|item| matches_search(*item, &needle))
        .filter(|item| filter.map_or(true, |value| item.matches_filter(value)))
        .cloned()
        .collect();

    matched.sort_by(compare_items);

    trace!(
        total = items.len(),
        matched = matched.len(),
        search = search_text,
        filter = ?filter,
        "Catalog query evaluated"
    );

    matched
}

fn matches_search<T: CatalogItem>(item: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    item.title().to_lowercase().contains(needle)
        || item.summary().to_lowercase().contains(needle)
        || item
            .search_terms()
            .iter()
            .any(|term| term.to_lowercase().contains(needle))
}

fn compare_items<T: CatalogItem>(a: &T, b: &T) -> Ordering {
    match (a.featured(), b.featured()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.cmp_rank(b),
    }
}

/// Query state owned by a listing: the search box and the selected filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub search: String,
    pub filter: Option<String>,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// True when nothing narrows the listing
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.filter.is_none()
    }

    /// Reset to the unfiltered state
    pub fn clear(&mut self) {
        self.search.clear();
        self.filter = None;
    }

    pub fn apply<T>(&self, items: &[T]) -> Vec<T>
    where
        T: CatalogItem + Clone,
    {
        query(items, &self.search, self.filter.as_deref())
    }
}
