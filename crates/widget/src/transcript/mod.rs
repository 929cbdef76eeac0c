mod entry;
mod state;

pub use entry::{EntryId, EntryKind, Role, THINKING_PLACEHOLDER, TranscriptEntry};
pub use state::Transcript;
