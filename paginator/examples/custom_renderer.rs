// Example: a caller-supplied renderer that also handles clicks (immediate mode).
use paginator::{PageEntry, PageHandle, PageKind, PaginationOptions, Paginator, RenderFn};

fn main() {
    let opts = PaginationOptions::new(500, 10)
        .with_always_show_all_buttons(true)
        .with_label_texts("First", "Prev", "Next", "Last");
    let mut p = Paginator::new(opts).expect("valid options");

    // Pretend the user clicks "Next" on every frame.
    let renderer = RenderFn::new(|entry: &PageEntry, handle: &mut PageHandle<'_>| {
        if entry.kind == PageKind::Next {
            handle.activate();
        }
        match (entry.active, entry.disabled) {
            (true, _) => format!("<b>{}</b>", entry.label),
            (_, true) => format!("<s>{}</s>", entry.label),
            _ => entry.label.clone(),
        }
    });

    for _ in 0..4 {
        let before = p.current_page();
        let html = p.render(&renderer);
        println!("frame @ page {before}: {}", html.join(" | "));
    }
}
