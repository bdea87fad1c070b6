//! Page-number strip for paginated listings.
//!
//! Short listings show every page. Longer ones keep the first and last page
//! plus the neighbours of the current page, with an ellipsis in each gap.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Listings with at most this many pages never collapse.
const COLLAPSE_AFTER: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Items to render for `current` of `total` pages. `current` is clamped into
/// `[1, total]`; an empty listing yields no items.
#[must_use]
pub fn page_numbers(current: u32, total: u32) -> Vec<PageItem> {
    if total == 0 {
        return Vec::new();
    }
    if total <= COLLAPSE_AFTER {
        return (1..=total).map(PageItem::Page).collect();
    }

    let current = current.clamp(1, total);
    let mut pages = vec![1, current.saturating_sub(1).max(1), current, current.saturating_add(1).min(total), total];
    pages.sort_unstable();
    pages.dedup();

    let mut items = Vec::with_capacity(pages.len() * 2);
    let mut previous = 0;
    for page in pages {
        if previous != 0 && page > previous + 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(page));
        previous = page;
    }
    items
}

/// Previous page, if any.
#[must_use]
pub fn prev_page(current: u32) -> Option<u32> {
    (current > 1).then(|| current - 1)
}

/// Next page, if any.
#[must_use]
pub fn next_page(current: u32, total: u32) -> Option<u32> {
    (current < total).then(|| current + 1)
}
