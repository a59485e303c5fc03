use std::ops::Range;

use serde::Serialize;

/// How many numbered buttons the page bar shows around the current page.
const WINDOW: usize = 5;

pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size)
}

/// Index range of `page` (1-based) inside a result set of `count` items.
/// `None` for page 0 or a page starting past the end.
pub fn page_bounds(page: usize, page_size: usize, count: usize) -> Option<Range<usize>> {
    let start = page.checked_sub(1)?.checked_mul(page_size)?;
    if start >= count {
        return None;
    }
    Some(start..(start + page_size).min(count))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub page_size: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageLink {
    Page { number: usize, active: bool },
    Ellipsis,
}

/// Numbered page buttons: up to five pages around `current`, plus the first
/// and last page with an ellipsis where pages are skipped.
pub fn page_window(current: usize, total: usize) -> Vec<PageLink> {
    let mut links = Vec::new();
    if total == 0 {
        return links;
    }
    let current = current.clamp(1, total);

    let mut start = current.saturating_sub(2).max(1);
    let end = (start + WINDOW - 1).min(total);
    if end - start < WINDOW - 1 {
        start = end.saturating_sub(WINDOW - 1).max(1);
    }

    if start > 1 {
        links.push(PageLink::Page { number: 1, active: current == 1 });
        if start > 2 {
            links.push(PageLink::Ellipsis);
        }
    }
    for number in start..=end {
        links.push(PageLink::Page { number, active: number == current });
    }
    if end < total {
        if end + 1 < total {
            links.push(PageLink::Ellipsis);
        }
        links.push(PageLink::Page { number: total, active: current == total });
    }
    links
}
