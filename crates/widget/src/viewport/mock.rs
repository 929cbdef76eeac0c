use std::collections::HashMap;

use super::{ScrollMetrics, ScrollMotion, Viewport};
use crate::transcript::EntryId;
use chatpane_core::{Error, Result};

/// Mock viewport for deterministic testing without a real view.
///
/// Records every scroll command and applies it to its own geometry, so a
/// sequence of decisions behaves like a live container. Smooth-scroll and
/// geometry lookups can be made to fail to exercise the fallback paths.
#[derive(Debug)]
pub struct MockViewport {
    metrics: ScrollMetrics,
    entry_tops: HashMap<EntryId, f32>,
    uniform_entry_top: Option<f32>,
    commands: Vec<(f32, ScrollMotion)>,
    reject_smooth: bool,
    fail_geometry: bool,
}

impl MockViewport {
    /// A viewport of the given height over the given content height,
    /// positioned at the top.
    pub fn new(viewport: f32, content: f32) -> Self {
        Self {
            metrics: ScrollMetrics::new(0.0, viewport, content),
            entry_tops: HashMap::new(),
            uniform_entry_top: None,
            commands: Vec::new(),
            reject_smooth: false,
            fail_geometry: false,
        }
    }

    /// Position the viewport so the bottom gap equals `gap`.
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.metrics.offset = (self.metrics.max_offset() - gap).max(0.0);
        self
    }

    /// Start at the very bottom.
    pub fn at_bottom(self) -> Self {
        self.with_gap(0.0)
    }

    /// Every entry reports this top offset.
    pub fn with_uniform_entry_top(mut self, top: f32) -> Self {
        self.uniform_entry_top = Some(top);
        self
    }

    /// Smooth scroll commands fail; instant ones still work.
    pub fn rejecting_smooth(mut self) -> Self {
        self.reject_smooth = true;
        self
    }

    /// All geometry lookups fail.
    pub fn failing_geometry(mut self) -> Self {
        self.fail_geometry = true;
        self
    }

    /// Pin one entry's top offset.
    pub fn place_entry(&mut self, id: EntryId, top: f32) {
        self.entry_tops.insert(id, top);
    }

    /// Reposition the viewport (simulates the user scrolling).
    pub fn set_offset(&mut self, offset: f32) {
        self.metrics.offset = offset.clamp(0.0, self.metrics.max_offset());
    }

    /// Grow or shrink the scrollable content.
    pub fn set_content(&mut self, content: f32) {
        self.metrics.content = content;
    }

    /// Scroll commands issued so far, in order.
    pub fn commands(&self) -> &[(f32, ScrollMotion)] {
        &self.commands
    }

    pub fn last_command(&self) -> Option<(f32, ScrollMotion)> {
        self.commands.last().copied()
    }
}

impl Viewport for MockViewport {
    fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    fn entry_top(&self, id: EntryId) -> Result<f32> {
        if self.fail_geometry {
            return Err(Error::View("geometry unavailable".to_string()));
        }
        if let Some(top) = self.entry_tops.get(&id) {
            return Ok(*top);
        }
        if let Some(top) = self.uniform_entry_top {
            return Ok(top);
        }
        Err(Error::View(format!("no geometry for entry {:?}", id)))
    }

    fn scroll_to(&mut self, offset: f32, motion: ScrollMotion) -> Result<()> {
        if self.reject_smooth && motion == ScrollMotion::Smooth {
            return Err(Error::View("smooth scrolling unavailable".to_string()));
        }
        self.commands.push((offset, motion));
        self.metrics.offset = offset.clamp(0.0, self.metrics.max_offset());
        Ok(())
    }
}
