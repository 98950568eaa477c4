use std::cmp::Ordering;

/// Shape shared by every listing the query engine works over.
///
/// Projects and blog posts both implement this; the engine only ever sees
/// items through it, so new listings need nothing beyond an impl.
pub trait CatalogItem {
    /// Unique identifier within one catalog list
    fn id(&self) -> &str;

    /// Display title, searched
    fn title(&self) -> &str;

    /// Short description or excerpt, searched
    fn summary(&self) -> &str;

    /// Additional labels matched by the free-text search
    fn search_terms(&self) -> &[String] {
        &[]
    }

    /// Featured items list ahead of everything else
    fn featured(&self) -> bool;

    /// Values this item offers on the listing's filter axis (category or tags)
    fn filter_values(&self) -> Vec<&str>;

    /// True when `value` is the listing's "show everything" choice rather
    /// than a real filter value
    fn is_unfiltered(_value: &str) -> bool {
        false
    }

    /// Exact match against the listing's filter axis
    fn matches_filter(&self, value: &str) -> bool {
        self.filter_values().iter().any(|v| *v == value)
    }

    /// Tiebreak between two items with the same featured status
    fn cmp_rank(&self, other: &Self) -> Ordering;
}
