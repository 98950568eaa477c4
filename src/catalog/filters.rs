//! Filter choices offered by a listing.

use super::item::CatalogItem;
use super::query::ALL_FILTER;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One selectable filter button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub label: String,
    /// Filter to apply; `None` clears the filter
    pub value: Option<String>,
    pub count: usize,
}

/// Distinct filter values present across `items`, first-seen order.
///
/// Only values carried by at least one item are returned, each once. Values
/// the item type reserves for its unfiltered listing are never offered.
pub fn derive_filter_options<T: CatalogItem>(items: &[T]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut options = Vec::new();
    for item in items {
        for value in item.filter_values() {
            if !T::is_unfiltered(value) && seen.insert(value) {
                options.push(value.to_string());
            }
        }
    }
    options
}

/// Filter values with the number of items carrying each.
pub fn filter_options<T: CatalogItem>(items: &[T]) -> Vec<FilterOption> {
    derive_filter_options(items)
        .into_iter()
        .map(|value| {
            let count = items.iter().filter(|item| item.matches_filter(&value)).count();
            FilterOption {
                label: value.clone(),
                value: Some(value),
                count,
            }
        })
        .collect()
}

/// Prepend the "All" choice covering `total` items; it carries no value, so
/// selecting it clears the filter.
pub fn with_all(options: Vec<FilterOption>, total: usize) -> Vec<FilterOption> {
    let mut all = Vec::with_capacity(options.len() + 1);
    all.push(FilterOption {
        label: ALL_FILTER.to_string(),
        value: None,
        count: total,
    });
    all.extend(options);
    all
}
