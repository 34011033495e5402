use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use paginator::{
    OnPageChangeCallback, PageEntry, PageKind, PageRenderer, PaginationError, PaginationOptions,
    Paginator,
};

use crate::{Controlled, HeaderLayout, ResizeHub, ResizeSubscription};

/// A hook that recomputes the grid's scrollbars (e.g. after a window resize).
pub type OnScrollUpdateCallback = Arc<dyn Fn() + Send + Sync>;

/// Where the grid's rows come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaginationMode {
    /// The grid holds every row and slices out the current page itself.
    #[default]
    Local,
    /// The grid holds only the current page; the host fetches rows on `on_page_change`.
    Remote,
}

/// Configuration for [`PagedGrid`].
#[derive(Clone)]
pub struct GridOptions {
    pub size_per_page: usize,
    /// Initial (and controlled) current page.
    pub current_page: usize,
    pub mode: PaginationMode,
    /// Total row count. Defaults to the number of rows handed to the grid; set it in remote
    /// mode, where the grid only holds one page.
    pub data_size: Option<usize>,
    /// Pagination bar options; `None` disables pagination (all rows are shown, no bar).
    ///
    /// `data_size` and `size_per_page` inside are overridden by the grid.
    pub pagination: Option<PaginationOptions>,
    /// Forwarded to the paginator; replaces a callback set in `pagination` when present.
    pub on_page_change: Option<OnPageChangeCallback>,
    pub auto_header_height: bool,
    pub overlay_cover_header: bool,
    pub on_scroll_update: Option<OnScrollUpdateCallback>,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            size_per_page: 25,
            current_page: 1,
            mode: PaginationMode::Local,
            data_size: None,
            pagination: None,
            on_page_change: None,
            auto_header_height: true,
            overlay_cover_header: false,
            on_scroll_update: None,
        }
    }
}

impl GridOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size_per_page(mut self, size_per_page: usize) -> Self {
        self.size_per_page = size_per_page;
        self
    }

    pub fn with_current_page(mut self, current_page: usize) -> Self {
        self.current_page = current_page;
        self
    }

    pub fn with_mode(mut self, mode: PaginationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_remote(self, data_size: usize) -> Self {
        self.with_mode(PaginationMode::Remote).with_data_size(Some(data_size))
    }

    pub fn with_data_size(mut self, data_size: Option<usize>) -> Self {
        self.data_size = data_size;
        self
    }

    pub fn with_pagination(mut self, pagination: Option<PaginationOptions>) -> Self {
        self.pagination = pagination;
        self
    }

    /// Enables the grid's default pagination bar, which always shows every navigation button.
    pub fn with_default_pagination(self) -> Self {
        self.with_pagination(Some(
            PaginationOptions::default().with_always_show_all_buttons(true),
        ))
    }

    pub fn with_on_page_change(
        mut self,
        on_page_change: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_page_change = on_page_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_auto_header_height(mut self, auto_header_height: bool) -> Self {
        self.auto_header_height = auto_header_height;
        self
    }

    pub fn with_overlay_cover_header(mut self, overlay_cover_header: bool) -> Self {
        self.overlay_cover_header = overlay_cover_header;
        self
    }

    pub fn with_on_scroll_update(
        mut self,
        on_scroll_update: Option<impl Fn() + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll_update = on_scroll_update.map(|f| Arc::new(f) as _);
        self
    }
}

impl fmt::Debug for GridOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridOptions")
            .field("size_per_page", &self.size_per_page)
            .field("current_page", &self.current_page)
            .field("mode", &self.mode)
            .field("data_size", &self.data_size)
            .field("pagination", &self.pagination)
            .field("auto_header_height", &self.auto_header_height)
            .field("overlay_cover_header", &self.overlay_cover_header)
            .finish_non_exhaustive()
    }
}

/// A framework-neutral data grid state that wires rows into a [`Paginator`].
///
/// The grid owns the paginator, and the paginator is the single owner of the current page:
/// navigation updates it and notifies `on_page_change` in the same call. A controlled page
/// passed through [`PagedGrid::sync_current_page`] overrides it only when the host value
/// changes. Until local navigation takes over, the controlled page is re-applied (clamped)
/// whenever the data size, page size or bar options change.
pub struct PagedGrid<T> {
    rows: Vec<T>,
    mode: PaginationMode,
    data_size: Option<usize>,
    paginated: bool,
    pager: Paginator,
    on_page_change: Option<OnPageChangeCallback>,
    controlled_page: Controlled<usize>,
    /// The page still follows the controlled value (no local navigation since it was observed).
    follows_controlled: bool,
    loading: bool,
    overlay_cover_header: bool,
    header: HeaderLayout,
    on_scroll_update: Option<OnScrollUpdateCallback>,
    resize: Option<ResizeSubscription>,
}

impl<T> PagedGrid<T> {
    pub fn new(rows: Vec<T>, options: GridOptions) -> Result<Self, PaginationError> {
        let paginated = options.pagination.is_some();
        let mut pagination = options.pagination.unwrap_or_default();
        pagination.data_size = options.data_size.unwrap_or(rows.len());
        pagination.size_per_page = options.size_per_page;
        if options.on_page_change.is_some() {
            pagination.on_page_change.clone_from(&options.on_page_change);
        }

        let pager = Paginator::with_current_page(pagination, options.current_page)?;
        adebug!(
            rows = rows.len(),
            data_size = pager.data_size(),
            paginated,
            mode = ?options.mode,
            "PagedGrid::new"
        );
        Ok(Self {
            rows,
            mode: options.mode,
            data_size: options.data_size,
            paginated,
            pager,
            on_page_change: options.on_page_change,
            controlled_page: Controlled::with_initial(options.current_page),
            follows_controlled: true,
            loading: false,
            overlay_cover_header: options.overlay_cover_header,
            header: HeaderLayout::new(options.auto_header_height),
            on_scroll_update: options.on_scroll_update,
            resize: None,
        })
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Replaces the rows (e.g. after a remote fetch), keeping the current page when possible.
    pub fn set_rows(&mut self, rows: Vec<T>) -> Result<(), PaginationError> {
        self.rows = rows;
        self.sync_data_size()
    }

    /// Overrides the total row count (`None` = number of rows held).
    pub fn set_data_size(&mut self, data_size: Option<usize>) -> Result<(), PaginationError> {
        self.data_size = data_size;
        self.sync_data_size()
    }

    pub fn data_size(&self) -> usize {
        self.data_size.unwrap_or(self.rows.len())
    }

    fn sync_data_size(&mut self) -> Result<(), PaginationError> {
        let data_size = self.data_size();
        self.pager.set_data_size(data_size)?;
        self.reapply_controlled_page();
        Ok(())
    }

    /// Re-clamps the controlled page against new bounds, unless local navigation took over.
    fn reapply_controlled_page(&mut self) {
        if !self.follows_controlled {
            return;
        }
        if let Some(&page) = self.controlled_page.observed() {
            self.pager.set_current_page(page);
        }
    }

    pub fn mode(&self) -> PaginationMode {
        self.mode
    }

    pub fn is_paginated(&self) -> bool {
        self.paginated
    }

    pub fn paginator(&self) -> &Paginator {
        &self.pager
    }

    /// Applies new pagination bar options (labels, window size, ...), keeping the grid's data
    /// size and page size.
    ///
    /// A callback given in [`GridOptions::on_page_change`] takes precedence over the one in
    /// `pagination`, as in [`PagedGrid::new`]; otherwise the current callback is kept when the
    /// new options carry none.
    pub fn set_pagination(
        &mut self,
        pagination: Option<PaginationOptions>,
    ) -> Result<(), PaginationError> {
        let Some(mut next) = pagination else {
            self.paginated = false;
            return Ok(());
        };
        let current = self.pager.options();
        next.data_size = current.data_size;
        next.size_per_page = current.size_per_page;
        if self.on_page_change.is_some() {
            next.on_page_change.clone_from(&self.on_page_change);
        } else if next.on_page_change.is_none() {
            next.on_page_change.clone_from(&current.on_page_change);
        }
        self.pager.set_options(next)?;
        self.paginated = true;
        self.reapply_controlled_page();
        Ok(())
    }

    pub fn size_per_page(&self) -> usize {
        self.pager.size_per_page()
    }

    pub fn set_size_per_page(&mut self, size_per_page: usize) -> Result<(), PaginationError> {
        self.pager.set_size_per_page(size_per_page)?;
        self.reapply_controlled_page();
        Ok(())
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    /// Zero-based page position, as expected by table engines.
    pub fn page_index(&self) -> usize {
        self.pager.page_index()
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages()
    }

    /// Feeds the host's controlled page value.
    ///
    /// The grid resets to it (clamped) only when it differs from the last value seen; returns
    /// the page the grid moved to, if any. No `on_page_change` is emitted.
    pub fn sync_current_page(&mut self, external: usize) -> Option<usize> {
        let page = self.controlled_page.observe(external)?;
        self.follows_controlled = true;
        let before = self.pager.current_page();
        self.pager.set_current_page(page);
        let after = self.pager.current_page();
        if after != page {
            awarn!(external, clamped = after, "PagedGrid: controlled page out of range");
        }
        atrace!(external, before, after, "PagedGrid::sync_current_page");
        (after != before).then_some(after)
    }

    /// The rows to display for the current page.
    ///
    /// Local mode slices the held rows; remote mode (and an unpaginated grid) returns them as
    /// given.
    pub fn page_rows(&self) -> &[T] {
        if !self.paginated || self.mode == PaginationMode::Remote {
            return &self.rows;
        }
        let range = self.pager.item_range();
        let len = self.rows.len();
        &self.rows[range.start.min(len)..range.end.min(len)]
    }

    /// Page-control entries for the pagination bar (empty when pagination is disabled).
    pub fn entries(&self) -> Vec<PageEntry> {
        if !self.paginated {
            return Vec::new();
        }
        self.pager.entries()
    }

    pub fn render<R: PageRenderer>(&mut self, renderer: &R) -> Vec<R::Output> {
        if !self.paginated {
            return Vec::new();
        }
        self.pager.render(renderer)
    }

    pub fn navigate(&mut self, kind: PageKind) -> Option<usize> {
        if !self.paginated {
            return None;
        }
        let moved = self.pager.navigate(kind);
        if moved.is_some() {
            self.follows_controlled = false;
        }
        atrace!(?kind, page = ?moved, mode = ?self.mode, "PagedGrid::navigate");
        moved
    }

    pub fn activate(&mut self, entry: &PageEntry) -> Option<usize> {
        if entry.disabled {
            return None;
        }
        self.navigate(entry.kind)
    }

    pub fn go_to(&mut self, page: usize) -> Option<usize> {
        self.navigate(PageKind::Number(page))
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn header_layout(&self) -> &HeaderLayout {
        &self.header
    }

    pub fn header_layout_mut(&mut self) -> &mut HeaderLayout {
        &mut self.header
    }

    /// Reports re-measured header row heights. When they changed, the scrollbars are updated.
    pub fn on_header_resize(&mut self, row_heights: impl IntoIterator<Item = u32>) -> bool {
        let changed = self.header.measure(row_heights);
        if changed {
            self.update_scroll();
        }
        changed
    }

    /// Total header height; `None` when auto header height is off or not yet measured.
    pub fn header_height(&self) -> Option<u32> {
        self.header.total_height()
    }

    /// Top offset of the loading overlay.
    pub fn overlay_offset(&self) -> u32 {
        self.header.overlay_offset(self.overlay_cover_header)
    }

    pub fn update_scroll(&self) {
        if let Some(cb) = &self.on_scroll_update {
            cb();
        }
    }

    /// Subscribes the scrollbar update hook to `hub` until [`PagedGrid::unmount`] (or drop).
    pub fn mount(&mut self, hub: &ResizeHub) {
        let hook = self.on_scroll_update.clone();
        self.resize = Some(hub.subscribe(move || {
            if let Some(cb) = &hook {
                cb();
            }
        }));
        adebug!("PagedGrid::mount");
    }

    pub fn unmount(&mut self) {
        if self.resize.take().is_some() {
            adebug!("PagedGrid::unmount");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.resize.as_ref().is_some_and(ResizeSubscription::is_active)
    }
}

impl<T> fmt::Debug for PagedGrid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagedGrid")
            .field("rows", &self.rows.len())
            .field("mode", &self.mode)
            .field("data_size", &self.data_size())
            .field("paginated", &self.paginated)
            .field("pager", &self.pager)
            .field("loading", &self.loading)
            .field("header", &self.header)
            .field("mounted", &self.is_mounted())
            .finish_non_exhaustive()
    }
}
