use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;

use crate::render::{PageHandle, PageRenderer};
use crate::window::{entries_for, page_window};
use crate::{
    PageBounds, PageEntry, PageKind, PageState, PageWindow, PaginationError, PaginationOptions,
};

/// A headless pagination controller.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects.
/// - It owns the current page; the host feeds it data/page sizes and activation events.
/// - Rendering is exposed as an ordered list of [`PageEntry`] values (or via a
///   [`PageRenderer`] strategy).
///
/// The current page always lies in `[start_index, last_page]` (or equals `start_index` when
/// there are no pages). `on_page_change` fires only on actual transitions caused by
/// navigation; controlled resyncs and option changes re-clamp silently.
#[derive(Clone, Debug)]
pub struct Paginator {
    options: PaginationOptions,
    bounds: PageBounds,
    current_page: usize,
}

impl Paginator {
    /// Creates a paginator positioned on the first page.
    pub fn new(options: PaginationOptions) -> Result<Self, PaginationError> {
        let bounds = options.bounds()?;
        pdebug!(
            data_size = options.data_size,
            size_per_page = options.size_per_page,
            total_pages = bounds.total_pages,
            "Paginator::new"
        );
        Ok(Self {
            current_page: bounds.start_index,
            bounds,
            options,
        })
    }

    /// Creates a paginator positioned on `current_page` (clamped).
    pub fn with_current_page(
        options: PaginationOptions,
        current_page: usize,
    ) -> Result<Self, PaginationError> {
        let mut p = Self::new(options)?;
        p.current_page = p.bounds.clamp(current_page);
        Ok(p)
    }

    pub fn options(&self) -> &PaginationOptions {
        &self.options
    }

    /// Replaces the options, keeping the current page (re-clamped into the new range).
    ///
    /// Invalid options are rejected and the previous options are kept.
    pub fn set_options(&mut self, options: PaginationOptions) -> Result<(), PaginationError> {
        let bounds = match options.bounds() {
            Ok(bounds) => bounds,
            Err(err) => {
                pwarn!(error = ?err, "Paginator::set_options rejected");
                return Err(err);
            }
        };
        self.options = options;
        self.bounds = bounds;
        self.reclamp();
        ptrace!(
            data_size = self.options.data_size,
            size_per_page = self.options.size_per_page,
            current_page = self.current_page,
            "Paginator::set_options"
        );
        Ok(())
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(
        &mut self,
        f: impl FnOnce(&mut PaginationOptions),
    ) -> Result<(), PaginationError> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    pub fn set_on_page_change(
        &mut self,
        on_page_change: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) {
        self.options.on_page_change = on_page_change.map(|f| Arc::new(f) as _);
    }

    pub fn data_size(&self) -> usize {
        self.options.data_size
    }

    pub fn set_data_size(&mut self, data_size: usize) -> Result<(), PaginationError> {
        if self.options.data_size == data_size {
            return Ok(());
        }
        self.update_options(|o| o.data_size = data_size)
    }

    pub fn size_per_page(&self) -> usize {
        self.options.size_per_page
    }

    pub fn set_size_per_page(&mut self, size_per_page: usize) -> Result<(), PaginationError> {
        if self.options.size_per_page == size_per_page {
            return Ok(());
        }
        self.update_options(|o| o.size_per_page = size_per_page)
    }

    pub fn bounds(&self) -> PageBounds {
        self.bounds
    }

    pub fn total_pages(&self) -> usize {
        self.bounds.total_pages
    }

    pub fn start_index(&self) -> usize {
        self.bounds.start_index
    }

    pub fn last_page(&self) -> Option<usize> {
        self.bounds.last_page()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Zero-based position of the current page (e.g. for a table engine's `page_index`).
    pub fn page_index(&self) -> usize {
        self.current_page - self.bounds.start_index
    }

    /// Sets the current page from a controlled value (clamped).
    ///
    /// This is a resync, not a navigation: `on_page_change` is not invoked.
    pub fn set_current_page(&mut self, page: usize) {
        let clamped = self.bounds.clamp(page);
        if clamped != page {
            pwarn!(page, clamped, "Paginator::set_current_page clamped");
        }
        self.current_page = clamped;
    }

    pub fn is_first_page(&self) -> bool {
        self.bounds.is_first(self.current_page)
    }

    pub fn is_last_page(&self) -> bool {
        self.bounds.last_page().is_none_or(|last| self.current_page == last)
    }

    /// The range of item indexes shown on the current page.
    ///
    /// Empty when there are no items.
    pub fn item_range(&self) -> Range<usize> {
        let start = self
            .page_index()
            .saturating_mul(self.options.size_per_page)
            .min(self.options.data_size);
        let end = start
            .saturating_add(self.options.size_per_page)
            .min(self.options.data_size);
        start..end
    }

    pub fn window(&self) -> Option<PageWindow> {
        page_window(self.bounds, self.current_page, self.options.pagination_size)
    }

    /// Computes the page-control entries for the current state.
    pub fn entries(&self) -> Vec<PageEntry> {
        entries_for(&self.options, self.bounds, self.current_page)
    }

    /// The page a control of `kind` leads to from the current page.
    pub fn target_page(&self, kind: PageKind) -> usize {
        let current = self.current_page;
        let Some(last) = self.bounds.last_page() else {
            return self.bounds.start_index;
        };
        match kind {
            PageKind::First => self.bounds.start_index,
            PageKind::Prev => current.saturating_sub(1).max(self.bounds.start_index),
            PageKind::Next => current.saturating_add(1).min(last),
            PageKind::Last => last,
            PageKind::Number(page) => self.bounds.clamp(page),
        }
    }

    /// Navigates according to `kind`.
    ///
    /// Returns the new page, or `None` when the target equals the current page (no event is
    /// emitted in that case).
    pub fn navigate(&mut self, kind: PageKind) -> Option<usize> {
        let next = self.target_page(kind);
        if next == self.current_page {
            ptrace!(?kind, page = next, "Paginator::navigate no-op");
            return None;
        }
        ptrace!(?kind, from = self.current_page, to = next, "Paginator::navigate");
        self.current_page = next;
        if let Some(cb) = &self.options.on_page_change {
            cb(next);
        }
        Some(next)
    }

    /// Navigates according to an activated entry. Disabled entries are always a no-op.
    pub fn activate(&mut self, entry: &PageEntry) -> Option<usize> {
        if entry.disabled {
            return None;
        }
        self.navigate(entry.kind)
    }

    pub fn go_to(&mut self, page: usize) -> Option<usize> {
        self.navigate(PageKind::Number(page))
    }

    pub fn first(&mut self) -> Option<usize> {
        self.navigate(PageKind::First)
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.navigate(PageKind::Prev)
    }

    pub fn next(&mut self) -> Option<usize> {
        self.navigate(PageKind::Next)
    }

    pub fn last(&mut self) -> Option<usize> {
        self.navigate(PageKind::Last)
    }

    /// Renders the current entries in display order using `renderer`.
    ///
    /// Each entry gets a [`PageHandle`] through which the renderer may activate it (immediate
    /// mode). Entries rendered after an activation still describe the state at the start of
    /// the call; the next render reflects the new page.
    pub fn render<R: PageRenderer>(&mut self, renderer: &R) -> Vec<R::Output> {
        let entries = self.entries();
        let mut out = Vec::with_capacity(entries.len());
        for entry in &entries {
            let mut handle = PageHandle::new(self, entry);
            out.push(renderer.render_entry(entry, &mut handle));
        }
        out
    }

    /// Returns a lightweight snapshot of the current page state.
    pub fn state(&self) -> PageState {
        PageState {
            current_page: self.current_page,
            start_index: self.bounds.start_index,
            total_pages: self.bounds.total_pages,
        }
    }

    /// Restores the current page from a previously captured snapshot (clamped).
    pub fn restore_state(&mut self, state: PageState) {
        self.set_current_page(state.current_page);
    }

    fn reclamp(&mut self) {
        self.current_page = self.bounds.clamp(self.current_page);
    }
}
