/// Placeholder content shown while a reply is in flight
pub const THINKING_PLACEHOLDER: &str = "Thinking…";

/// Handle naming a transcript entry from append time to resolution time.
///
/// Replacement and removal go through this token, never through a "most
/// recent entry" lookup, so overlapping dispatches cannot clobber each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Which side of the conversation an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

/// Entry content variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// User message (content already escaped)
    UserMessage { text: String },
    /// In-flight placeholder, replaced when the reply resolves
    BotLoading { placeholder: String },
    /// Answer rendered as trusted HTML from the server
    BotAnswer { html: String },
    /// Failure rendered distinctly from an answer (content already escaped)
    BotError { message: String },
}

impl EntryKind {
    /// Create a user message entry kind
    pub fn user_message(text: impl Into<String>) -> Self {
        Self::UserMessage { text: text.into() }
    }

    /// Create the in-flight placeholder kind
    pub fn bot_loading() -> Self {
        Self::BotLoading { placeholder: THINKING_PLACEHOLDER.to_string() }
    }

    /// Create an answer kind holding trusted HTML
    pub fn bot_answer(html: impl Into<String>) -> Self {
        Self::BotAnswer { html: html.into() }
    }

    /// Create an error kind
    pub fn bot_error(message: impl Into<String>) -> Self {
        Self::BotError { message: message.into() }
    }
}

/// One rendered unit in the transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    id: EntryId,
    kind: EntryKind,
}

impl TranscriptEntry {
    pub(crate) fn new(id: EntryId, kind: EntryKind) -> Self {
        Self { id, kind }
    }

    pub(crate) fn replace_kind(&mut self, kind: EntryKind) {
        self.kind = kind;
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn kind(&self) -> &EntryKind {
        &self.kind
    }

    /// Which side of the conversation this entry belongs to
    pub fn role(&self) -> Role {
        match self.kind {
            EntryKind::UserMessage { .. } => Role::User,
            EntryKind::BotLoading { .. } | EntryKind::BotAnswer { .. } | EntryKind::BotError { .. } => Role::Bot,
        }
    }

    /// True only while the entry is the in-flight placeholder
    pub fn is_loading(&self) -> bool {
        matches!(self.kind, EntryKind::BotLoading { .. })
    }

    /// Rendered content, whatever the variant
    pub fn content(&self) -> &str {
        match &self.kind {
            EntryKind::UserMessage { text } => text,
            EntryKind::BotLoading { placeholder } => placeholder,
            EntryKind::BotAnswer { html } => html,
            EntryKind::BotError { message } => message,
        }
    }

    /// Get entry type name for debugging
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            EntryKind::UserMessage { .. } => "user-message",
            EntryKind::BotLoading { .. } => "bot-loading",
            EntryKind::BotAnswer { .. } => "bot-answer",
            EntryKind::BotError { .. } => "bot-error",
        }
    }
}
