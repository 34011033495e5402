//! Data-grid utilities for the `paginator` crate.
//!
//! The `paginator` crate is UI-agnostic and focuses on the pagination bar logic. This crate
//! provides small, framework-neutral helpers commonly needed by data grids:
//!
//! - A paged grid state that owns the current page and slices rows locally or remotely
//! - Controlled/uncontrolled value synchronisation
//! - Header row measurement for sticky headers and overlays
//! - Scoped resize subscriptions for scrollbar updates
//!
//! This crate is intentionally framework-agnostic (no egui/web bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controlled;
mod grid;
mod layout;
mod resize;

#[cfg(test)]
mod tests;

pub use controlled::Controlled;
pub use grid::{GridOptions, OnScrollUpdateCallback, PagedGrid, PaginationMode};
pub use layout::{HeaderLayout, OnMeasureCallback};
pub use resize::{ResizeHub, ResizeSubscription};
