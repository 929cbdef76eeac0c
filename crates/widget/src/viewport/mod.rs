mod mock;

pub use mock::MockViewport;

use crate::transcript::EntryId;
use chatpane_core::Result;

/// Scroll geometry sampled from the view at decision time.
///
/// Nothing here is stored; every decision re-reads the live geometry so the
/// controller cannot drift from what the user actually sees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Current scroll offset from the top of the content
    pub offset: f32,
    /// Height of the visible viewport
    pub viewport: f32,
    /// Total scrollable content height
    pub content: f32,
}

impl ScrollMetrics {
    pub fn new(offset: f32, viewport: f32, content: f32) -> Self {
        Self { offset, viewport, content }
    }

    /// Distance between the bottom of the viewport and the bottom of the content.
    pub fn gap(&self) -> f32 {
        (self.content - (self.offset + self.viewport)).max(0.0)
    }

    /// Largest valid scroll offset.
    pub fn max_offset(&self) -> f32 {
        (self.content - self.viewport).max(0.0)
    }

    /// Whether the viewport sits within `threshold` of the bottom (inclusive).
    pub fn is_near_bottom(&self, threshold: f32) -> bool {
        self.gap() <= threshold
    }
}

/// How a scroll command should move the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMotion {
    /// Jump immediately
    Instant,
    /// Animate; a view may not support this and error, callers fall back
    Smooth,
}

/// The view seam a host binds the chat pane to.
///
/// Implementations wrap whatever owns the pixels; they are handed in at
/// construction time, never looked up globally. Methods may be called several
/// times per decision and must be cheap.
pub trait Viewport {
    /// Sample the current scroll geometry.
    fn metrics(&self) -> ScrollMetrics;

    /// Offset of an entry's top edge within the scrollable content.
    fn entry_top(&self, id: EntryId) -> Result<f32>;

    /// Move the viewport to `offset`.
    fn scroll_to(&mut self, offset: f32, motion: ScrollMotion) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_basic() {
        let metrics = ScrollMetrics::new(0.0, 300.0, 1000.0);
        assert_eq!(metrics.gap(), 700.0);

        let metrics = ScrollMetrics::new(700.0, 300.0, 1000.0);
        assert_eq!(metrics.gap(), 0.0);
    }

    #[test]
    fn test_gap_never_negative() {
        // Overscroll (rubber-banding) reads as gap zero.
        let metrics = ScrollMetrics::new(750.0, 300.0, 1000.0);
        assert_eq!(metrics.gap(), 0.0);
    }

    #[test]
    fn test_max_offset() {
        assert_eq!(ScrollMetrics::new(0.0, 300.0, 1000.0).max_offset(), 700.0);
        // Content shorter than the viewport cannot scroll at all.
        assert_eq!(ScrollMetrics::new(0.0, 300.0, 120.0).max_offset(), 0.0);
    }

    #[test]
    fn test_near_bottom_exact_at_threshold() {
        // gap == threshold counts as near-bottom; one pixel more does not.
        let at = ScrollMetrics::new(620.0, 300.0, 1000.0);
        assert_eq!(at.gap(), 80.0);
        assert!(at.is_near_bottom(80.0));

        let past = ScrollMetrics::new(619.0, 300.0, 1000.0);
        assert_eq!(past.gap(), 81.0);
        assert!(!past.is_near_bottom(80.0));
    }

    #[test]
    fn test_short_content_is_near_bottom() {
        let metrics = ScrollMetrics::new(0.0, 300.0, 120.0);
        assert!(metrics.is_near_bottom(0.0));
    }
}
