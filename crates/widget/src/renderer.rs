use chatpane_core::config::{ScrollConfig, TranscriptConfig};
use chatpane_core::escape;

use crate::indicator::IndicatorController;
use crate::scroll::ScrollController;
use crate::transcript::{EntryId, EntryKind, Transcript};
use crate::viewport::{ScrollMotion, Viewport};

/// Renders transcript mutations into an injected viewport.
///
/// Every append runs the same protocol: construct the entry, append it, ask
/// the scroll controller to reveal it, and surface the new-messages
/// affordance when the reveal declined to move the viewport. User text and
/// error text are escaped here; answer HTML is trusted as-is.
pub struct TranscriptRenderer<V: Viewport> {
    transcript: Transcript,
    scroll: ScrollController,
    indicator: IndicatorController,
    view: V,
}

impl<V: Viewport> TranscriptRenderer<V> {
    /// Renderer with default tuning over the given view.
    pub fn new(view: V) -> Self {
        Self {
            transcript: Transcript::new(),
            scroll: ScrollController::default(),
            indicator: IndicatorController::new(),
            view,
        }
    }

    /// Renderer with explicit scroll and retention tuning.
    pub fn with_config(view: V, scroll: &ScrollConfig, transcript: &TranscriptConfig) -> Self {
        Self {
            transcript: Transcript::with_capacity(transcript.max_entries),
            scroll: ScrollController::new(scroll),
            indicator: IndicatorController::new(),
            view,
        }
    }

    /// Append the user's message, escaped.
    pub fn append_user(&mut self, text: &str) -> EntryId {
        let id = self.transcript.push(EntryKind::user_message(escape(text)));
        self.reveal_appended(id);
        id
    }

    /// Append the in-flight placeholder; the returned handle names it for the
    /// resolve/fail operations.
    pub fn append_bot_loading(&mut self) -> EntryId {
        let id = self.transcript.push(EntryKind::bot_loading());
        self.reveal_appended(id);
        id
    }

    /// Replace the loading entry with trusted answer HTML (append when the
    /// handle is gone). A successful reveal clears the affordance; a declined
    /// one surfaces it.
    pub fn resolve_with_answer(&mut self, handle: EntryId, html: &str) {
        let id = self.transcript.resolve_loading(handle, EntryKind::bot_answer(html));
        let revealed = self.scroll.reveal_entry(&mut self.view, id, self.scroll.reveal_options(false));
        if revealed {
            self.indicator.hide();
        } else {
            self.indicator.show();
        }
    }

    /// Drop the loading entry and append an escaped error entry.
    pub fn fail_with_error(&mut self, handle: EntryId, message: &str) {
        self.transcript.remove_loading(handle);
        let id = self.transcript.push(EntryKind::bot_error(escape(message)));
        self.reveal_appended(id);
    }

    /// Empty the transcript and park the viewport at the top.
    pub fn clear(&mut self) {
        self.transcript.clear();
        if let Err(e) = self.view.scroll_to(0.0, ScrollMotion::Instant) {
            tracing::warn!(error = %e, "scroll reset failed on clear");
        }
    }

    /// Debounced scroll settlement: clear the affordance once the user is
    /// back at the tail.
    pub fn on_scroll_settled(&mut self) {
        if self.scroll.is_reading_tail(&self.view) {
            self.indicator.hide();
        }
    }

    /// The affordance's own jump action.
    pub fn jump_to_latest(&mut self) {
        self.scroll.scroll_to_bottom(&mut self.view, ScrollMotion::Smooth);
        self.indicator.hide();
    }

    fn reveal_appended(&mut self, id: EntryId) {
        let revealed = self.scroll.reveal_entry(&mut self.view, id, self.scroll.reveal_options(false));
        if !revealed {
            self.indicator.show();
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn indicator(&self) -> &IndicatorController {
        &self.indicator
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::THINKING_PLACEHOLDER;
    use crate::viewport::MockViewport;

    fn renderer_at_bottom() -> TranscriptRenderer<MockViewport> {
        TranscriptRenderer::new(MockViewport::new(300.0, 1000.0).at_bottom().with_uniform_entry_top(900.0))
    }

    fn renderer_scrolled_away() -> TranscriptRenderer<MockViewport> {
        TranscriptRenderer::new(
            MockViewport::new(300.0, 1000.0).with_gap(400.0).with_uniform_entry_top(900.0),
        )
    }

    #[test]
    fn test_append_user_escapes_text() {
        let mut renderer = renderer_at_bottom();
        let id = renderer.append_user("<b>hi</b>");
        assert_eq!(renderer.transcript().get(id).unwrap().content(), "&lt;b&gt;hi&lt;/b&gt;");
    }

    #[test]
    fn test_append_near_bottom_scrolls_without_indicator() {
        let mut renderer = renderer_at_bottom();
        renderer.append_user("hello");

        assert!(!renderer.view().commands().is_empty());
        assert!(!renderer.indicator().is_visible());
    }

    #[test]
    fn test_append_scrolled_away_shows_indicator_and_keeps_position() {
        let mut renderer = renderer_scrolled_away();
        let offset_before = renderer.view().metrics().offset;
        renderer.append_user("hello");

        assert!(renderer.view().commands().is_empty());
        assert_eq!(renderer.view().metrics().offset, offset_before);
        assert!(renderer.indicator().is_visible());
    }

    #[test]
    fn test_loading_placeholder_lifecycle() {
        let mut renderer = renderer_at_bottom();
        renderer.append_user("q");
        let handle = renderer.append_bot_loading();

        assert!(renderer.transcript().has_loading());
        assert_eq!(renderer.transcript().get(handle).unwrap().content(), THINKING_PLACEHOLDER);

        renderer.resolve_with_answer(handle, "<p>answer</p>");
        assert!(!renderer.transcript().has_loading());
        assert_eq!(renderer.transcript().len(), 2);
        // Trusted HTML is not escaped.
        assert_eq!(renderer.transcript().get(handle).unwrap().content(), "<p>answer</p>");
    }

    #[test]
    fn test_answer_reveal_hides_indicator() {
        let mut renderer = renderer_scrolled_away();
        renderer.append_user("q");
        let handle = renderer.append_bot_loading();
        assert!(renderer.indicator().is_visible());

        // User scrolls back to the tail before the answer lands.
        let max = renderer.view().metrics().max_offset();
        renderer.view_mut().set_offset(max);

        renderer.resolve_with_answer(handle, "<p>answer</p>");
        assert!(!renderer.indicator().is_visible());
    }

    #[test]
    fn test_answer_while_scrolled_away_shows_indicator() {
        let mut renderer = renderer_at_bottom();
        renderer.append_user("q");
        let handle = renderer.append_bot_loading();

        // User scrolls far up while waiting.
        renderer.view_mut().set_offset(0.0);

        renderer.resolve_with_answer(handle, "<p>answer</p>");
        assert!(renderer.indicator().is_visible());
        assert!(!renderer.transcript().has_loading());
    }

    #[test]
    fn test_fail_with_error_replaces_loading_with_escaped_error() {
        let mut renderer = renderer_at_bottom();
        renderer.append_user("q");
        let handle = renderer.append_bot_loading();

        renderer.fail_with_error(handle, "/chat returned <500>");

        assert!(!renderer.transcript().has_loading());
        let last = renderer.transcript().last().unwrap();
        assert_eq!(last.type_name(), "bot-error");
        assert_eq!(last.content(), "/chat returned &lt;500&gt;");
    }

    #[test]
    fn test_clear_empties_and_scrolls_to_top() {
        let mut renderer = renderer_at_bottom();
        renderer.append_user("one");
        renderer.append_user("two");

        renderer.clear();

        assert!(renderer.transcript().is_empty());
        assert_eq!(renderer.view().metrics().offset, 0.0);
        assert_eq!(renderer.view().last_command(), Some((0.0, ScrollMotion::Instant)));
    }

    #[test]
    fn test_on_scroll_settled_hides_indicator_only_at_tail() {
        let mut renderer = renderer_scrolled_away();
        renderer.append_user("hello");
        assert!(renderer.indicator().is_visible());

        // Still away from the tail: stays visible.
        renderer.on_scroll_settled();
        assert!(renderer.indicator().is_visible());

        let max = renderer.view().metrics().max_offset();
        renderer.view_mut().set_offset(max - 80.0);
        renderer.on_scroll_settled();
        assert!(!renderer.indicator().is_visible());
    }

    #[test]
    fn test_jump_to_latest_scrolls_and_hides() {
        let mut renderer = renderer_scrolled_away();
        renderer.append_user("hello");
        assert!(renderer.indicator().is_visible());

        renderer.jump_to_latest();

        assert_eq!(renderer.view().metrics().gap(), 0.0);
        assert!(!renderer.indicator().is_visible());
    }

    #[test]
    fn test_geometry_failure_still_reveals_via_bottom() {
        let mut renderer =
            TranscriptRenderer::new(MockViewport::new(300.0, 1000.0).at_bottom().failing_geometry());
        renderer.append_user("hello");

        assert!(!renderer.indicator().is_visible());
        assert_eq!(renderer.view().last_command(), Some((700.0, ScrollMotion::Smooth)));
    }

    #[test]
    fn test_late_answer_appends_when_loading_already_failed() {
        let mut renderer = renderer_at_bottom();
        renderer.append_user("q");
        let handle = renderer.append_bot_loading();

        renderer.fail_with_error(handle, "timed out");
        renderer.resolve_with_answer(handle, "<p>late</p>");

        // user + error + appended late answer
        assert_eq!(renderer.transcript().len(), 3);
        assert_eq!(renderer.transcript().last().unwrap().content(), "<p>late</p>");
    }
}
