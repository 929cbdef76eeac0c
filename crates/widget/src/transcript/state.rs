use std::collections::VecDeque;

use super::entry::{EntryId, EntryKind, TranscriptEntry};

/// Conversation history for one chat pane.
///
/// Ordering is arrival order and never changes; the only mutations are
/// appends, in-place resolution of a loading placeholder, removal of a
/// loading placeholder, and clearing. Oldest entries are dropped past
/// `max_entries`.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    entries: VecDeque<TranscriptEntry>,
    max_entries: usize,
    next_id: u64,
}

impl Transcript {
    /// Create a new transcript with default max entries
    pub fn new() -> Self {
        Self { entries: VecDeque::with_capacity(100), max_entries: 1000, next_id: 0 }
    }

    /// Create a new transcript with custom max entries
    pub fn with_capacity(max_entries: usize) -> Self {
        Self { entries: VecDeque::with_capacity(max_entries.min(100)), max_entries, next_id: 0 }
    }

    /// Append an entry, returning its handle.
    pub fn push(&mut self, kind: EntryKind) -> EntryId {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        let id = EntryId::new(self.next_id);
        self.next_id += 1;
        self.entries.push_back(TranscriptEntry::new(id, kind));
        id
    }

    /// Replace the loading entry named by `id` in place, preserving its
    /// position; append at the end when the handle no longer names a live
    /// loading entry.
    pub fn resolve_loading(&mut self, id: EntryId, kind: EntryKind) -> EntryId {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id() == id && e.is_loading()) {
            entry.replace_kind(kind);
            id
        } else {
            self.push(kind)
        }
    }

    /// Drop the loading entry named by `id` if still live.
    pub fn remove_loading(&mut self, id: EntryId) -> bool {
        if let Some(pos) = self.entries.iter().position(|e| e.id() == id && e.is_loading()) {
            self.entries.remove(pos);
            true
        } else {
            false
        }
    }

    /// Get an entry by handle
    pub fn get(&self, id: EntryId) -> Option<&TranscriptEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Get all entries
    pub fn entries(&self) -> &VecDeque<TranscriptEntry> {
        &self.entries
    }

    /// Get last entry
    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.back()
    }

    /// Get number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if transcript is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether any loading placeholder is live
    pub fn has_loading(&self) -> bool {
        self.entries.iter().any(|e| e.is_loading())
    }

    /// Clear all entries. Handles stay unique across a clear; `next_id` is
    /// not reset.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
