use crate::*;

use paginator::{DefaultPageRenderer, PageKind, PaginationOptions};

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::vec;
use std::vec::Vec;

fn rows(n: usize) -> Vec<usize> {
    (0..n).collect()
}

fn recorder() -> (Arc<Mutex<Vec<usize>>>, impl Fn(usize) + Send + Sync + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, move |page| sink.lock().unwrap().push(page))
}

#[test]
fn local_grid_slices_rows_per_page() {
    let mut g = PagedGrid::new(
        rows(60),
        GridOptions::new()
            .with_size_per_page(25)
            .with_default_pagination(),
    )
    .unwrap();

    assert_eq!(g.data_size(), 60);
    assert_eq!(g.total_pages(), 3);
    assert_eq!(g.page_rows().len(), 25);
    assert_eq!(g.page_rows()[0], 0);

    assert_eq!(g.go_to(3), Some(3));
    assert_eq!(g.page_index(), 2);
    assert_eq!(g.page_rows(), &rows(60)[50..60]);
}

#[test]
fn unpaginated_grid_shows_everything() {
    let mut g = PagedGrid::new(rows(60), GridOptions::new()).unwrap();
    assert!(!g.is_paginated());
    assert_eq!(g.page_rows().len(), 60);
    assert!(g.entries().is_empty());
    assert_eq!(g.navigate(PageKind::Next), None);
    assert!(g.render(&DefaultPageRenderer::new()).is_empty());
}

#[test]
fn default_grid_pagination_shows_all_buttons() {
    let g = PagedGrid::new(
        rows(100),
        GridOptions::new().with_default_pagination(),
    )
    .unwrap();
    let kinds: Vec<PageKind> = g.entries().iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            PageKind::First,
            PageKind::Prev,
            PageKind::Number(1),
            PageKind::Number(2),
            PageKind::Number(3),
            PageKind::Number(4),
            PageKind::Next,
            PageKind::Last,
        ]
    );
    let entries = g.entries();
    assert!(entries[0].disabled && entries[1].disabled);
}

#[test]
fn remote_grid_forwards_page_changes_and_keeps_rows() {
    let (seen, on_change) = recorder();
    let mut g = PagedGrid::new(
        rows(25),
        GridOptions::new()
            .with_remote(1_000)
            .with_default_pagination()
            .with_on_page_change(Some(on_change)),
    )
    .unwrap();

    assert_eq!(g.mode(), PaginationMode::Remote);
    assert_eq!(g.total_pages(), 40);

    let next = g.entries().into_iter().find(|e| e.kind == PageKind::Next).unwrap();
    assert_eq!(g.activate(&next), Some(2));
    assert_eq!(g.current_page(), 2);
    // Remote rows are shown as given until the host replaces them.
    assert_eq!(g.page_rows(), &rows(25)[..]);

    g.set_loading(true);
    g.set_rows((25..50).collect()).unwrap();
    g.set_loading(false);
    assert_eq!(g.page_rows()[0], 25);
    assert_eq!(g.current_page(), 2);

    // Navigating to the current page does not refetch.
    assert_eq!(g.go_to(2), None);
    assert_eq!(*seen.lock().unwrap(), vec![2]);
}

#[test]
fn disabled_entry_is_inert_in_the_grid() {
    let (seen, on_change) = recorder();
    let mut g = PagedGrid::new(
        rows(100),
        GridOptions::new()
            .with_default_pagination()
            .with_on_page_change(Some(on_change)),
    )
    .unwrap();
    let first = g.entries().into_iter().find(|e| e.kind == PageKind::First).unwrap();
    assert!(first.disabled);
    assert_eq!(g.activate(&first), None);
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn controlled_page_resyncs_only_on_change() {
    let (seen, on_change) = recorder();
    let mut g = PagedGrid::new(
        rows(250),
        GridOptions::new()
            .with_current_page(2)
            .with_default_pagination()
            .with_on_page_change(Some(on_change)),
    )
    .unwrap();
    assert_eq!(g.current_page(), 2);

    // Local navigation survives a re-render with the same controlled value.
    g.go_to(7);
    assert_eq!(g.sync_current_page(2), None);
    assert_eq!(g.current_page(), 7);

    // A new controlled value wins, without emitting a change event.
    assert_eq!(g.sync_current_page(4), Some(4));
    assert_eq!(g.current_page(), 4);
    assert_eq!(g.sync_current_page(99), Some(10));
    assert_eq!(*seen.lock().unwrap(), vec![7]);
}

#[test]
fn controlled_page_survives_late_data_size() {
    let mut g = PagedGrid::<usize>::new(
        Vec::new(),
        GridOptions::new()
            .with_mode(PaginationMode::Remote)
            .with_current_page(3)
            .with_default_pagination(),
    )
    .unwrap();
    assert_eq!(g.total_pages(), 0);
    assert_eq!(g.current_page(), 1);
    assert_eq!(g.sync_current_page(3), None);

    g.set_data_size(Some(1_000)).unwrap();
    assert_eq!(g.current_page(), 3);
    assert_eq!(g.sync_current_page(3), None);
    assert_eq!(g.current_page(), 3);

    // Page size changes keep following the controlled value too.
    g.set_size_per_page(500).unwrap();
    assert_eq!(g.current_page(), 2);
    g.set_size_per_page(25).unwrap();
    assert_eq!(g.current_page(), 3);
}

#[test]
fn local_navigation_stops_following_the_controlled_page() {
    let mut g = PagedGrid::new(
        rows(30),
        GridOptions::new()
            .with_size_per_page(10)
            .with_current_page(5)
            .with_default_pagination(),
    )
    .unwrap();
    assert_eq!(g.current_page(), 3);

    assert_eq!(g.go_to(2), Some(2));
    g.set_rows(rows(100)).unwrap();
    assert_eq!(g.current_page(), 2);

    // A new controlled value resumes following.
    assert_eq!(g.sync_current_page(9), Some(9));
    g.set_rows(rows(40)).unwrap();
    assert_eq!(g.current_page(), 4);
    g.set_rows(rows(100)).unwrap();
    assert_eq!(g.current_page(), 9);
}

#[test]
fn controlled_observer_reports_changes() {
    let mut c = Controlled::new();
    assert_eq!(c.observe(1), Some(1));
    assert_eq!(c.observe(1), None);
    assert_eq!(c.observe(3), Some(3));
    assert_eq!(c.observed(), Some(&3));
    c.reset();
    assert_eq!(c.observe(3), Some(3));

    let mut initial = Controlled::with_initial("a");
    assert_eq!(initial.observe("a"), None);
}

#[test]
fn shrinking_rows_reclamps_the_page() {
    let mut g = PagedGrid::new(
        rows(100),
        GridOptions::new()
            .with_size_per_page(10)
            .with_current_page(9)
            .with_default_pagination(),
    )
    .unwrap();
    assert_eq!(g.current_page(), 9);
    g.set_rows(rows(35)).unwrap();
    assert_eq!(g.total_pages(), 4);
    assert_eq!(g.current_page(), 4);
    assert_eq!(g.page_rows(), &rows(35)[30..35]);

    g.set_rows(Vec::new()).unwrap();
    assert!(g.page_rows().is_empty());
    assert!(g.entries().is_empty());
}

#[test]
fn set_pagination_keeps_grid_sizes() {
    let mut g = PagedGrid::new(
        rows(250),
        GridOptions::new().with_size_per_page(10),
    )
    .unwrap();
    assert!(!g.is_paginated());

    g.set_pagination(Some(PaginationOptions::new(0, 1).with_pagination_size(3)))
        .unwrap();
    assert!(g.is_paginated());
    assert_eq!(g.size_per_page(), 10);
    assert_eq!(g.total_pages(), 25);
    let numbers = g.entries().iter().filter(|e| !e.kind.is_jump()).count();
    assert_eq!(numbers, 3);

    assert!(g.set_size_per_page(0).is_err());
    assert_eq!(g.size_per_page(), 10);
}

#[test]
fn set_pagination_keeps_the_grid_callback() {
    let (seen, on_change) = recorder();
    let mut g = PagedGrid::new(
        rows(100),
        GridOptions::new()
            .with_size_per_page(10)
            .with_default_pagination()
            .with_on_page_change(Some(on_change)),
    )
    .unwrap();

    let (bar_seen, bar_change) = recorder();
    g.set_pagination(Some(
        PaginationOptions::default().with_on_page_change(Some(bar_change)),
    ))
    .unwrap();
    assert_eq!(g.go_to(2), Some(2));
    assert_eq!(*seen.lock().unwrap(), vec![2]);
    assert!(bar_seen.lock().unwrap().is_empty());
}

#[test]
fn set_pagination_uses_bar_callback_without_grid_callback() {
    let mut g = PagedGrid::new(
        rows(100),
        GridOptions::new().with_size_per_page(10).with_default_pagination(),
    )
    .unwrap();

    let (seen, on_change) = recorder();
    g.set_pagination(Some(
        PaginationOptions::default().with_on_page_change(Some(on_change)),
    ))
    .unwrap();
    assert_eq!(g.go_to(4), Some(4));

    // Options without a callback keep the one already installed.
    g.set_pagination(Some(PaginationOptions::default())).unwrap();
    assert_eq!(g.go_to(5), Some(5));
    assert_eq!(*seen.lock().unwrap(), vec![4, 5]);
}

#[test]
fn header_layout_reports_heights_and_offsets() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut layout = HeaderLayout::new(true);
    layout.set_on_measure(Some({
        let calls = Arc::clone(&calls);
        move |_: &HeaderLayout| {
            calls.fetch_add(1, Ordering::SeqCst);
        }
    }));

    assert_eq!(layout.total_height(), None);
    assert!(layout.measure([30, 24, 20]));
    assert!(!layout.measure([30, 24, 20]));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    assert_eq!(layout.total_height(), Some(74));
    assert_eq!(layout.sticky_offset(0), None);
    assert_eq!(layout.sticky_offset(1), Some(30));
    assert_eq!(layout.sticky_offset(2), Some(54));
    assert_eq!(layout.sticky_offset(3), None);
    assert_eq!(layout.overlay_offset(false), 74);
    assert_eq!(layout.overlay_offset(true), 0);

    layout.set_enabled(false);
    assert_eq!(layout.total_height(), None);
    assert!(!layout.measure([1]));
    assert_eq!(layout.overlay_offset(false), 0);
}

#[test]
fn header_resize_triggers_scroll_update() {
    let updates = Arc::new(AtomicUsize::new(0));
    let mut g = PagedGrid::new(
        rows(10),
        GridOptions::new()
            .with_default_pagination()
            .with_on_scroll_update(Some({
                let updates = Arc::clone(&updates);
                move || {
                    updates.fetch_add(1, Ordering::SeqCst);
                }
            })),
    )
    .unwrap();

    assert_eq!(g.header_height(), None);
    assert!(g.on_header_resize([40]));
    assert!(!g.on_header_resize([40]));
    assert_eq!(g.header_height(), Some(40));
    assert_eq!(g.overlay_offset(), 40);
    assert_eq!(updates.load(Ordering::SeqCst), 1);

    let manual = PagedGrid::new(rows(10), GridOptions::new().with_auto_header_height(false))
        .unwrap();
    assert_eq!(manual.header_height(), None);
}

#[test]
fn resize_subscription_is_scoped_to_mount() {
    let updates = Arc::new(AtomicUsize::new(0));
    let hub = ResizeHub::new();
    let mut g = PagedGrid::new(
        rows(10),
        GridOptions::new().with_on_scroll_update(Some({
            let updates = Arc::clone(&updates);
            move || {
                updates.fetch_add(1, Ordering::SeqCst);
            }
        })),
    )
    .unwrap();

    g.mount(&hub);
    assert!(g.is_mounted());
    assert_eq!(hub.notify(), 1);
    assert_eq!(updates.load(Ordering::SeqCst), 1);

    g.unmount();
    assert!(!g.is_mounted());
    assert!(hub.is_empty());
    assert_eq!(hub.notify(), 0);
    assert_eq!(updates.load(Ordering::SeqCst), 1);

    g.mount(&hub);
    drop(g);
    assert!(hub.is_empty());
}

#[test]
fn resize_hub_tolerates_unsubscribe_during_notify() {
    let hub = ResizeHub::new();
    let hits = Rc::new(Cell::new(0));
    let slot: Rc<Cell<Option<ResizeSubscription>>> = Rc::new(Cell::new(None));

    let sub = hub.subscribe({
        let hits = Rc::clone(&hits);
        let slot = Rc::clone(&slot);
        move || {
            hits.set(hits.get() + 1);
            drop(slot.take());
        }
    });
    slot.set(Some(sub));
    let _other = hub.subscribe(|| {});

    assert_eq!(hub.len(), 2);
    assert_eq!(hub.notify(), 2);
    assert_eq!(hits.get(), 1);
    assert_eq!(hub.len(), 1);
    assert_eq!(hub.notify(), 1);
    assert_eq!(hits.get(), 1);
}

#[test]
fn subscription_outlives_hub_safely() {
    let hub = ResizeHub::new();
    let sub = hub.subscribe(|| {});
    assert!(sub.is_active());
    drop(hub);
    assert!(!sub.is_active());
    drop(sub);
}
