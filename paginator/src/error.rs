/// Errors reported when pagination options cannot describe a valid page range.
///
/// Out-of-range pages are never an error: they are clamped into the valid range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    #[error("size_per_page must be greater than zero")]
    ZeroSizePerPage,
    #[error("pagination_size must be greater than zero")]
    ZeroPaginationSize,
    #[error("page range overflows usize (start_index={start_index}, total_pages={total_pages})")]
    PageRangeOverflow {
        start_index: usize,
        total_pages: usize,
    },
}
