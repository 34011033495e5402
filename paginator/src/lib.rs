//! A headless pagination engine.
//!
//! For data-grid integration (row slicing, controlled pages, header layout), see the
//! `paginator-adapter` crate.
//!
//! This crate focuses on the logic behind a pagination bar: which page buttons to show for a
//! given data size, page size and current page, which of them are active or disabled, and how
//! activating a button maps to a page transition.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the data size and page size
//! - activation events (clicks) for the rendered entries
//! - a [`PageRenderer`] (or use [`DefaultPageRenderer`])
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod options;
mod paginator;
mod render;
mod state;
mod types;
mod window;


pub use error::PaginationError;
pub use options::{OnPageChangeCallback, PageLabels, PaginationOptions};
pub use paginator::Paginator;
pub use render::{DefaultPageRenderer, PageButton, PageHandle, PageRenderer, RenderFn};
pub use state::PageState;
pub use types::{PageBounds, PageEntry, PageKind, PageWindow};
pub use window::{compute_entries, page_window};
