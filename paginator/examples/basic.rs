// Example: minimal usage, navigation and the default text rendering.
use paginator::{DefaultPageRenderer, PaginationOptions, Paginator};

fn main() {
    let opts = PaginationOptions::new(1_234, 25).with_on_page_change(Some(|page: usize| {
        println!("  -> on_page_change({page})");
    }));
    let mut p = Paginator::new(opts).expect("valid options");

    let show = |p: &mut Paginator| {
        let buttons = p.render(&DefaultPageRenderer::new());
        let text: Vec<String> = buttons.iter().map(ToString::to_string).collect();
        println!("page {:>2}/{}: {}", p.current_page(), p.total_pages(), text.join(" "));
    };

    show(&mut p);
    p.next();
    show(&mut p);
    p.go_to(20);
    show(&mut p);
    p.last();
    show(&mut p);

    // Already on the last page: no event.
    assert_eq!(p.next(), None);
    println!("items on this page: {:?}", p.item_range());
}
