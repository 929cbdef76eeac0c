pub mod debounce;
pub mod indicator;
pub mod renderer;
pub mod scroll;
pub mod transcript;
pub mod viewport;

pub use debounce::ScrollDebouncer;
pub use indicator::IndicatorController;
pub use renderer::TranscriptRenderer;
pub use scroll::{RevealOptions, ScrollController};
pub use transcript::{EntryId, EntryKind, Role, THINKING_PLACEHOLDER, Transcript, TranscriptEntry};
pub use viewport::{MockViewport, ScrollMetrics, ScrollMotion, Viewport};
