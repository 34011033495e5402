use alloc::string::String;
use alloc::sync::Arc;

use crate::{PageBounds, PaginationError};

/// A callback fired when the current page actually changes.
///
/// The argument is the new page number.
pub type OnPageChangeCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Texts and titles for the jump controls.
///
/// Labels are passed through as-is; a title of `None` renders the control without a title.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageLabels {
    pub first: String,
    pub prev: String,
    pub next: String,
    pub last: String,
    pub first_title: Option<String>,
    pub prev_title: Option<String>,
    pub next_title: Option<String>,
    pub last_title: Option<String>,
}

impl Default for PageLabels {
    fn default() -> Self {
        Self {
            first: "<<".into(),
            prev: "<".into(),
            next: ">".into(),
            last: ">>".into(),
            first_title: Some("first page".into()),
            prev_title: Some("previous page".into()),
            next_title: Some("next page".into()),
            last_title: Some("last page".into()),
        }
    }
}

/// Configuration for [`crate::Paginator`] and [`crate::compute_entries`].
///
/// Cheap to clone: the change callback is stored in an `Arc`, so hosts can rebuild options on
/// every render and hand them to `Paginator::set_options`.
pub struct PaginationOptions {
    /// Total number of items.
    pub data_size: usize,
    /// Items per page. Must be non-zero.
    pub size_per_page: usize,
    /// Number of the first page (usually `1`).
    pub page_start_index: usize,
    /// Maximum number of numbered buttons in the bar. Must be non-zero; odd values center the
    /// current page.
    pub pagination_size: usize,
    /// Whether First/Last jump controls exist.
    pub with_first_and_last: bool,
    /// Render every navigation control even at the boundaries (disabled instead of hidden).
    pub always_show_all_buttons: bool,
    /// Render nothing at all when there is exactly one page.
    pub hide_single_page: bool,
    pub disable_page_title: bool,
    pub labels: PageLabels,
    pub on_page_change: Option<OnPageChangeCallback>,
}

impl Clone for PaginationOptions {
    fn clone(&self) -> Self {
        Self {
            data_size: self.data_size,
            size_per_page: self.size_per_page,
            page_start_index: self.page_start_index,
            pagination_size: self.pagination_size,
            with_first_and_last: self.with_first_and_last,
            always_show_all_buttons: self.always_show_all_buttons,
            hide_single_page: self.hide_single_page,
            disable_page_title: self.disable_page_title,
            labels: self.labels.clone(),
            on_page_change: self.on_page_change.clone(),
        }
    }
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self::new(0, 10)
    }
}

impl PaginationOptions {
    pub fn new(data_size: usize, size_per_page: usize) -> Self {
        Self {
            data_size,
            size_per_page,
            page_start_index: 1,
            pagination_size: 5,
            with_first_and_last: true,
            always_show_all_buttons: false,
            hide_single_page: false,
            disable_page_title: false,
            labels: PageLabels::default(),
            on_page_change: None,
        }
    }

    /// Checks the options and derives the page range they describe.
    pub fn bounds(&self) -> Result<PageBounds, PaginationError> {
        if self.pagination_size == 0 {
            return Err(PaginationError::ZeroPaginationSize);
        }
        PageBounds::new(self.data_size, self.size_per_page, self.page_start_index)
    }

    pub fn validate(&self) -> Result<(), PaginationError> {
        self.bounds().map(|_| ())
    }

    pub fn with_data_size(mut self, data_size: usize) -> Self {
        self.data_size = data_size;
        self
    }

    pub fn with_size_per_page(mut self, size_per_page: usize) -> Self {
        self.size_per_page = size_per_page;
        self
    }

    pub fn with_page_start_index(mut self, page_start_index: usize) -> Self {
        self.page_start_index = page_start_index;
        self
    }

    pub fn with_pagination_size(mut self, pagination_size: usize) -> Self {
        self.pagination_size = pagination_size;
        self
    }

    pub fn with_first_and_last(mut self, with_first_and_last: bool) -> Self {
        self.with_first_and_last = with_first_and_last;
        self
    }

    pub fn with_always_show_all_buttons(mut self, always_show_all_buttons: bool) -> Self {
        self.always_show_all_buttons = always_show_all_buttons;
        self
    }

    pub fn with_hide_single_page(mut self, hide_single_page: bool) -> Self {
        self.hide_single_page = hide_single_page;
        self
    }

    pub fn with_disable_page_title(mut self, disable_page_title: bool) -> Self {
        self.disable_page_title = disable_page_title;
        self
    }

    pub fn with_labels(mut self, labels: PageLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Sets the four jump-control texts at once (first, prev, next, last).
    pub fn with_label_texts(
        mut self,
        first: impl Into<String>,
        prev: impl Into<String>,
        next: impl Into<String>,
        last: impl Into<String>,
    ) -> Self {
        self.labels.first = first.into();
        self.labels.prev = prev.into();
        self.labels.next = next.into();
        self.labels.last = last.into();
        self
    }

    pub fn with_on_page_change(
        mut self,
        on_page_change: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_page_change = on_page_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for PaginationOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PaginationOptions")
            .field("data_size", &self.data_size)
            .field("size_per_page", &self.size_per_page)
            .field("page_start_index", &self.page_start_index)
            .field("pagination_size", &self.pagination_size)
            .field("with_first_and_last", &self.with_first_and_last)
            .field("always_show_all_buttons", &self.always_show_all_buttons)
            .field("hide_single_page", &self.hide_single_page)
            .field("disable_page_title", &self.disable_page_title)
            .field("labels", &self.labels)
            .finish_non_exhaustive()
    }
}
