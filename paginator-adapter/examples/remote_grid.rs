// Example: a remotely paginated grid that "fetches" a page whenever the page changes.
use std::sync::{Arc, Mutex};

use paginator::DefaultPageRenderer;
use paginator_adapter::{GridOptions, PagedGrid, ResizeHub};

fn fetch(page: usize, size: usize) -> Vec<String> {
    let start = (page - 1) * size;
    (start..start + size).map(|i| format!("row #{i}")).collect()
}

fn main() {
    const PAGE_SIZE: usize = 5;
    let pending = Arc::new(Mutex::new(None::<usize>));

    let mut grid = PagedGrid::new(
        fetch(1, PAGE_SIZE),
        GridOptions::new()
            .with_size_per_page(PAGE_SIZE)
            .with_remote(48)
            .with_default_pagination()
            .with_on_page_change(Some({
                let pending = Arc::clone(&pending);
                move |page| *pending.lock().unwrap() = Some(page)
            }))
            .with_on_scroll_update(Some(|| println!("  (scrollbar updated)"))),
    )
    .expect("valid grid options");

    let hub = ResizeHub::new();
    grid.mount(&hub);
    grid.on_header_resize([32, 28]);
    println!("header height = {:?}", grid.header_height());

    for _ in 0..3 {
        let bar: Vec<String> = grid
            .render(&DefaultPageRenderer::new())
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("page {}: {:?} | {}", grid.current_page(), grid.page_rows(), bar.join(" "));

        grid.go_to(grid.current_page() + 3);
        let requested = pending.lock().unwrap().take();
        if let Some(page) = requested {
            grid.set_loading(true);
            grid.set_rows(fetch(page, PAGE_SIZE)).expect("valid data size");
            grid.set_loading(false);
        }
    }

    // A window resize recomputes scrollbars while mounted.
    hub.notify();
    grid.unmount();
    assert_eq!(hub.notify(), 0);
}
