/// A lightweight, serializable snapshot of the pagination state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. It is useful for
/// restoring the page across frames without coupling the paginator to a UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageState {
    pub current_page: usize,
    pub start_index: usize,
    pub total_pages: usize,
}

impl PageState {
    pub fn last_page(&self) -> Option<usize> {
        if self.total_pages == 0 {
            return None;
        }
        Some(self.start_index.saturating_add(self.total_pages - 1))
    }
}
