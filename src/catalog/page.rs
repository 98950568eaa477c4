use serde::{Deserialize, Serialize};

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

/// Slice `items` into 1-based pages of `page_size`.
///
/// Page 0 is read as page 1. A zero page size yields an empty page with no
/// pages at all; pages past the end are empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let total = items.len();

    if page_size == 0 {
        return Page {
            data: Vec::new(),
            total,
            page,
            page_size,
            total_pages: 0,
        };
    }

    let total_pages = total.div_ceil(page_size);
    let start = (page - 1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);

    Page {
        data: items[start..end].to_vec(),
        total,
        page,
        page_size,
        total_pages,
    }
}
