use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

/// A callback fired after header rows were re-measured with different heights.
pub type OnMeasureCallback = Arc<dyn Fn(&HeaderLayout) + Send + Sync>;

/// Measured header geometry of a data grid.
///
/// The host measures its rendered header rows (on mount and whenever they resize) and reports
/// the heights here. The layout then drives sticky header offsets, the scroll container's top
/// padding and the loading overlay position.
#[derive(Clone, Default)]
pub struct HeaderLayout {
    enabled: bool,
    measured: bool,
    row_heights: Vec<u32>,
    on_measure: Option<OnMeasureCallback>,
}

impl HeaderLayout {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling forgets all measurements.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if !enabled {
            self.measured = false;
            self.row_heights.clear();
        }
    }

    pub fn set_on_measure(
        &mut self,
        on_measure: Option<impl Fn(&HeaderLayout) + Send + Sync + 'static>,
    ) {
        self.on_measure = on_measure.map(|f| Arc::new(f) as _);
    }

    /// Records the heights of the header rows, top to bottom.
    ///
    /// Returns `true` when the layout changed. Ignored while disabled.
    pub fn measure(&mut self, row_heights: impl IntoIterator<Item = u32>) -> bool {
        if !self.enabled {
            return false;
        }
        let heights: Vec<u32> = row_heights.into_iter().collect();
        if self.measured && heights == self.row_heights {
            return false;
        }
        self.row_heights = heights;
        self.measured = true;
        atrace!(
            rows = self.row_heights.len(),
            total = ?self.total_height(),
            "HeaderLayout::measure"
        );
        if let Some(cb) = &self.on_measure {
            cb(self);
        }
        true
    }

    pub fn is_measured(&self) -> bool {
        self.measured
    }

    pub fn row_heights(&self) -> &[u32] {
        &self.row_heights
    }

    /// Sum of all header row heights; `None` while disabled or not yet measured.
    pub fn total_height(&self) -> Option<u32> {
        if !self.enabled || !self.measured {
            return None;
        }
        Some(
            self.row_heights
                .iter()
                .fold(0u32, |acc, &h| acc.saturating_add(h)),
        )
    }

    /// Top offset of a sticky header row: the heights of all rows above it.
    ///
    /// `None` for the first row, for rows that were not measured, or while unmeasured.
    pub fn sticky_offset(&self, row: usize) -> Option<u32> {
        if row == 0 || !self.measured || row >= self.row_heights.len() {
            return None;
        }
        Some(
            self.row_heights[..row]
                .iter()
                .fold(0u32, |acc, &h| acc.saturating_add(h)),
        )
    }

    /// Top offset of the loading overlay: `0` when it covers the header, the header height
    /// otherwise.
    pub fn overlay_offset(&self, cover_header: bool) -> u32 {
        if cover_header {
            return 0;
        }
        self.total_height().unwrap_or(0)
    }
}

impl fmt::Debug for HeaderLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderLayout")
            .field("enabled", &self.enabled)
            .field("measured", &self.measured)
            .field("row_heights", &self.row_heights)
            .finish_non_exhaustive()
    }
}
