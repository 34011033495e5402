use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::{PageBounds, PageEntry, PageKind, PageWindow, PaginationError, PaginationOptions};

/// Computes the window of numbered pages around `current_page`.
///
/// The window holds at most `pagination_size` pages, is centered on the current page where
/// possible, and is shifted back (never below `start_index`) when it would run past the last
/// page. Returns `None` when there are no pages or `pagination_size` is zero.
pub fn page_window(
    bounds: PageBounds,
    current_page: usize,
    pagination_size: usize,
) -> Option<PageWindow> {
    let last = bounds.last_page()?;
    if pagination_size == 0 {
        return None;
    }

    let current = bounds.clamp(current_page);
    let mut start = current
        .saturating_sub(pagination_size / 2)
        .max(bounds.start_index);
    let mut end = start.saturating_add(pagination_size - 1);
    if end > last {
        end = last;
        start = (end + 1)
            .saturating_sub(pagination_size)
            .max(bounds.start_index);
    }
    Some(PageWindow { start, end })
}

/// Computes the ordered page-control entries for `current_page`.
///
/// `current_page` is clamped into the valid range first. An empty list means nothing should be
/// rendered (no pages, or a single page with `hide_single_page`).
pub fn compute_entries(
    options: &PaginationOptions,
    current_page: usize,
) -> Result<Vec<PageEntry>, PaginationError> {
    let bounds = options.bounds()?;
    Ok(entries_for(options, bounds, current_page))
}

pub(crate) fn entries_for(
    options: &PaginationOptions,
    bounds: PageBounds,
    current_page: usize,
) -> Vec<PageEntry> {
    let Some(last) = bounds.last_page() else {
        return Vec::new();
    };
    if bounds.total_pages == 1 && options.hide_single_page {
        return Vec::new();
    }

    let current = bounds.clamp(current_page);
    if current != current_page {
        pwarn!(current_page, clamped = current, "compute_entries: current page out of range");
    }

    let Some(window) = page_window(bounds, current, options.pagination_size) else {
        return Vec::new();
    };
    let mut kinds = Vec::with_capacity(window.len() + 4);

    if options.always_show_all_buttons {
        if options.with_first_and_last {
            kinds.push(PageKind::First);
        }
        kinds.push(PageKind::Prev);
    } else if window.start != bounds.start_index
        && bounds.total_pages > options.pagination_size
        && options.with_first_and_last
    {
        kinds.extend([PageKind::First, PageKind::Prev]);
    } else if bounds.total_pages > 1 {
        kinds.push(PageKind::Prev);
    }

    kinds.extend(window.pages().map(PageKind::Number));

    if options.always_show_all_buttons || (window.end <= last && kinds.len() > 1) {
        kinds.push(PageKind::Next);
    }
    if options.with_first_and_last && (window.end != last || options.always_show_all_buttons) {
        kinds.push(PageKind::Last);
    }

    let at_start = bounds.is_first(current);
    let at_end = current == last;
    let is_boundary = |kind: PageKind| match kind {
        PageKind::First | PageKind::Prev => at_start,
        PageKind::Next | PageKind::Last => at_end,
        PageKind::Number(_) => false,
    };

    let entries: Vec<PageEntry> = kinds
        .into_iter()
        .filter(|&kind| options.always_show_all_buttons || !is_boundary(kind))
        .map(|kind| build_entry(options, kind, current, is_boundary(kind)))
        .collect();

    ptrace!(
        current,
        window_start = window.start,
        window_end = window.end,
        len = entries.len(),
        "compute_entries"
    );
    entries
}

fn build_entry(
    options: &PaginationOptions,
    kind: PageKind,
    current: usize,
    disabled: bool,
) -> PageEntry {
    let labels = &options.labels;
    let (label, title): (String, Option<String>) = match kind {
        PageKind::First => (labels.first.clone(), labels.first_title.clone()),
        PageKind::Prev => (labels.prev.clone(), labels.prev_title.clone()),
        PageKind::Next => (labels.next.clone(), labels.next_title.clone()),
        PageKind::Last => (labels.last.clone(), labels.last_title.clone()),
        PageKind::Number(page) => {
            let text = page.to_string();
            (text.clone(), Some(text))
        }
    };
    PageEntry {
        kind,
        label,
        active: kind == PageKind::Number(current),
        disabled,
        title: if options.disable_page_title { None } else { title },
    }
}
