use alloc::string::String;
use core::ops::RangeInclusive;

use crate::PaginationError;

/// What a page-control entry does when activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageKind {
    First,
    Prev,
    Number(usize),
    Next,
    Last,
}

impl PageKind {
    /// Returns `true` for First/Prev/Next/Last.
    pub fn is_jump(self) -> bool {
        !matches!(self, Self::Number(_))
    }

    pub fn page(self) -> Option<usize> {
        match self {
            Self::Number(page) => Some(page),
            _ => None,
        }
    }
}

/// One renderable element of a pagination bar.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageEntry {
    pub kind: PageKind,
    pub label: String,
    /// `true` iff this is the number entry of the current page.
    pub active: bool,
    /// `true` for a jump control that would be a no-op at the current boundary.
    pub disabled: bool,
    /// `None` when titles are disabled (or no title is configured for a jump control).
    pub title: Option<String>,
}

/// The contiguous range of numbered pages shown in the bar (inclusive on both ends).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageWindow {
    pub start: usize,
    pub end: usize, // inclusive
}

impl PageWindow {
    pub fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            self.end - self.start + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn contains(&self, page: usize) -> bool {
        self.start <= page && page <= self.end
    }

    pub fn pages(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// The valid page range derived from a data size and a page size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageBounds {
    pub start_index: usize,
    pub total_pages: usize,
}

impl PageBounds {
    /// Computes `total_pages = ceil(data_size / size_per_page)`.
    pub fn new(
        data_size: usize,
        size_per_page: usize,
        start_index: usize,
    ) -> Result<Self, PaginationError> {
        if size_per_page == 0 {
            return Err(PaginationError::ZeroSizePerPage);
        }
        let total_pages = data_size.div_ceil(size_per_page);
        if total_pages > 0 && start_index.checked_add(total_pages - 1).is_none() {
            return Err(PaginationError::PageRangeOverflow {
                start_index,
                total_pages,
            });
        }
        Ok(Self {
            start_index,
            total_pages,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.total_pages == 0
    }

    /// The last valid page, or `None` when there are no pages.
    pub fn last_page(&self) -> Option<usize> {
        if self.total_pages == 0 {
            return None;
        }
        Some(self.start_index + (self.total_pages - 1))
    }

    pub fn contains(&self, page: usize) -> bool {
        self.last_page()
            .is_some_and(|last| self.start_index <= page && page <= last)
    }

    /// Clamps `page` into `[start_index, last_page]`.
    ///
    /// With no pages, every value clamps to `start_index`.
    pub fn clamp(&self, page: usize) -> usize {
        match self.last_page() {
            Some(last) => page.clamp(self.start_index, last),
            None => self.start_index,
        }
    }

    pub fn is_first(&self, page: usize) -> bool {
        page == self.start_index
    }

    pub fn is_last(&self, page: usize) -> bool {
        self.last_page() == Some(page)
    }
}
