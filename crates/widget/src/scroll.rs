use crate::transcript::EntryId;
use crate::viewport::{ScrollMotion, Viewport};
use chatpane_core::config::ScrollConfig;

/// Options for revealing a newly appended entry.
#[derive(Debug, Clone, Copy)]
pub struct RevealOptions {
    /// Scroll even when the user has scrolled away from the bottom
    pub force: bool,
    /// Gap kept above the entry's top edge
    pub margin: f32,
}

/// Decides and performs viewport movement for the transcript.
///
/// Reveals align the *top* of a new entry rather than its bottom, so the
/// start of a long answer stays visible instead of scrolling past it.
#[derive(Debug, Clone)]
pub struct ScrollController {
    near_bottom_px: f32,
    reveal_threshold_px: f32,
    reveal_margin_px: f32,
}

impl ScrollController {
    pub fn new(config: &ScrollConfig) -> Self {
        Self {
            near_bottom_px: config.near_bottom_px,
            reveal_threshold_px: config.reveal_threshold_px,
            reveal_margin_px: config.reveal_margin_px,
        }
    }

    /// Reveal options for an append, with the configured margin.
    pub fn reveal_options(&self, force: bool) -> RevealOptions {
        RevealOptions { force, margin: self.reveal_margin_px }
    }

    /// Whether the viewport sits within `threshold` of the bottom.
    pub fn is_near_bottom(&self, view: &dyn Viewport, threshold: f32) -> bool {
        view.metrics().is_near_bottom(threshold)
    }

    /// Passive check against the (tighter) scroll-detection threshold.
    pub fn is_reading_tail(&self, view: &dyn Viewport) -> bool {
        self.is_near_bottom(view, self.near_bottom_px)
    }

    /// Scroll to the maximum offset. A failed smooth scroll lands instantly
    /// instead.
    pub fn scroll_to_bottom(&self, view: &mut dyn Viewport, motion: ScrollMotion) {
        let target = view.metrics().max_offset();
        self.scroll_with_fallback(view, target, motion);
    }

    /// Bring an entry's top edge into view.
    ///
    /// Without `force`, declines (returns false) when the user has scrolled
    /// away from the bottom past the reveal threshold; the caller then
    /// surfaces the new-content affordance instead. A geometry failure falls
    /// back to the absolute bottom and still counts as revealed.
    pub fn reveal_entry(&self, view: &mut dyn Viewport, id: EntryId, opts: RevealOptions) -> bool {
        if !opts.force && !view.metrics().is_near_bottom(self.reveal_threshold_px) {
            return false;
        }

        match view.entry_top(id) {
            Ok(top) => {
                let target = (top - opts.margin).clamp(0.0, view.metrics().max_offset());
                self.scroll_with_fallback(view, target, ScrollMotion::Smooth);
            }
            Err(e) => {
                tracing::warn!(error = %e, "entry geometry unavailable, scrolling to bottom");
                self.scroll_to_bottom(view, ScrollMotion::Smooth);
            }
        }
        true
    }

    fn scroll_with_fallback(&self, view: &mut dyn Viewport, target: f32, motion: ScrollMotion) {
        if let Err(e) = view.scroll_to(target, motion) {
            if motion == ScrollMotion::Smooth {
                tracing::debug!(error = %e, "smooth scroll unavailable, jumping");
                if let Err(e) = view.scroll_to(target, ScrollMotion::Instant) {
                    tracing::warn!(error = %e, "scroll command failed");
                }
            } else {
                tracing::warn!(error = %e, "scroll command failed");
            }
        }
    }
}

impl Default for ScrollController {
    fn default() -> Self {
        Self::new(&ScrollConfig::default())
    }
}
