use std::sync::{Arc, Mutex};

use chatpane_client::{
    ChatEndpoint, DEFAULT_TOP_K, Endpoint, McpEndpoint, PrimaryVerdict, SecondaryVerdict,
    interpret_primary, interpret_secondary,
};
use chatpane_core::config::Config;
use chatpane_widget::{EntryId, TranscriptRenderer, Viewport};

/// Terminal result of one dispatch, for hosts that care to observe it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Empty input; nothing happened
    Ignored,
    /// Answer rendered from the primary endpoint
    AnsweredPrimary,
    /// Answer rendered after falling back to the secondary endpoint
    AnsweredFallback,
    /// Error entry rendered
    Failed,
}

/// Parse the optional top_k selector value; absent, unparsable, or zero falls
/// back to `default`.
pub fn parse_top_k(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|k| *k >= 1)
        .unwrap_or(default)
}

/// Orchestrates the primary/fallback request protocol for one chat pane.
///
/// The renderer is shared, not owned: dispatches may overlap freely (there is
/// deliberately no send lock), and the mutex is held only around transcript
/// mutation, never across a network await. Each dispatch resolves the loading
/// handle it created, so overlapping completions cannot clobber each other.
pub struct QueryDispatcher<V: Viewport> {
    primary: Arc<dyn Endpoint>,
    secondary: Arc<dyn Endpoint>,
    renderer: Arc<Mutex<TranscriptRenderer<V>>>,
    default_top_k: u32,
}

impl<V: Viewport> QueryDispatcher<V> {
    pub fn new(
        primary: Arc<dyn Endpoint>, secondary: Arc<dyn Endpoint>,
        renderer: Arc<Mutex<TranscriptRenderer<V>>>,
    ) -> Self {
        Self { primary, secondary, renderer, default_top_k: DEFAULT_TOP_K }
    }

    /// Build HTTP endpoints from configuration.
    pub fn from_config(config: &Config, renderer: Arc<Mutex<TranscriptRenderer<V>>>) -> Self {
        Self {
            primary: Arc::new(McpEndpoint::new(config.endpoints.primary_url.clone())),
            secondary: Arc::new(ChatEndpoint::new(config.endpoints.secondary_url.clone())),
            renderer,
            default_top_k: config.query.top_k,
        }
    }

    /// Override the default match count.
    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.default_top_k = top_k;
        self
    }

    /// Shared handle to the renderer this dispatcher feeds.
    pub fn renderer(&self) -> Arc<Mutex<TranscriptRenderer<V>>> {
        Arc::clone(&self.renderer)
    }

    /// Run one query through the primary/fallback protocol.
    ///
    /// Whitespace-only input is a silent no-op. Everything else produces
    /// exactly one terminal transcript entry (an answer or an error) and
    /// never leaves the loading placeholder behind.
    pub async fn dispatch(&self, query: &str, top_k: Option<u32>) -> DispatchOutcome {
        let query = query.trim();
        if query.is_empty() {
            return DispatchOutcome::Ignored;
        }
        let top_k = top_k.unwrap_or(self.default_top_k);

        let handle = {
            let mut renderer = self.renderer.lock().unwrap();
            renderer.append_user(query);
            renderer.append_bot_loading()
        };

        match self.primary.send(query, top_k).await {
            Ok(reply) => match interpret_primary(&reply) {
                PrimaryVerdict::Answered(html) => {
                    self.renderer.lock().unwrap().resolve_with_answer(handle, &html);
                    return DispatchOutcome::AnsweredPrimary;
                }
                PrimaryVerdict::Fallback => {}
            },
            // Transport-level failure is terminal even on the primary; only
            // replies the server actually sent escalate to the fallback.
            Err(e) => return self.fail(handle, &e.to_string()),
        }

        match self.secondary.send(query, top_k).await {
            Ok(reply) => match interpret_secondary(&reply, self.secondary.route()) {
                SecondaryVerdict::Answered(html) => {
                    self.renderer.lock().unwrap().resolve_with_answer(handle, &html);
                    DispatchOutcome::AnsweredFallback
                }
                SecondaryVerdict::Failed(message) => self.fail(handle, &message),
            },
            Err(e) => self.fail(handle, &e.to_string()),
        }
    }

    fn fail(&self, handle: EntryId, message: &str) -> DispatchOutcome {
        tracing::warn!(%message, "query failed");
        self.renderer.lock().unwrap().fail_with_error(handle, message);
        DispatchOutcome::Failed
    }
}
