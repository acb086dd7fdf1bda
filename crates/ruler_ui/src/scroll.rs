//! Scroll bookkeeping for a vertical scale.

use crate::units::Pixels;

/// Scroll position of a vertical scale plus the height of its viewport.
///
/// The offset is the distance the content has moved past the indicator. It is
/// allowed to leave `[0, extent]` during bounce or momentum; whoever maps the
/// offset to a value is responsible for clamping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    /// Current scroll offset
    pub offset: Pixels,
    /// Visible height of the scale
    pub viewport: Pixels,
}

impl ScrollState {
    /// Create state for a viewport of the given height, scrolled to the top.
    pub fn new(viewport: Pixels) -> Self {
        Self {
            offset: Pixels::ZERO,
            viewport,
        }
    }

    /// Scroll to a specific offset
    pub fn scroll_to(&mut self, offset: Pixels) {
        self.offset = offset;
    }

    /// Scroll by a delta
    pub fn scroll_by(&mut self, delta: Pixels) {
        self.offset = self.offset + delta;
    }

    /// Total scrollable height for a scale whose ticks span `extent`.
    ///
    /// Half a viewport of padding on each end lets the first and last tick
    /// reach the centered indicator.
    pub fn content_height(&self, extent: Pixels) -> Pixels {
        extent + self.viewport
    }
}
