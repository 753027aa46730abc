/// UI surfaces driven by the chat controller

use crate::formatter::RenderDocument;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Assistant => "AI Team",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum EntryBody {
    /// Rendered as escaped text.
    Text(String),
    /// In-flight indicator, removed once the request settles.
    Loading(String),
    Document(RenderDocument),
}

#[derive(Debug, Clone, Serialize)]
pub struct TranscriptEntry {
    pub id: Uuid,
    pub sender: Sender,
    pub body: EntryBody,
    pub timestamp: DateTime<Utc>,
}

impl TranscriptEntry {
    pub fn new(sender: Sender, body: EntryBody) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            body,
            timestamp: Utc::now(),
        }
    }
}

/// Transcript container, input field and send control as one surface.
pub trait ChatView {
    fn append(&mut self, entry: TranscriptEntry);

    /// Remove an entry by id. Returns false when no such entry exists.
    fn remove(&mut self, id: Uuid) -> bool;

    /// Enable or disable both the input field and the send control.
    fn set_input_enabled(&mut self, enabled: bool);

    fn input_text(&self) -> String;

    /// Append typed text to the input field.
    fn push_input(&mut self, text: &str);

    fn clear_input(&mut self);

    fn focus_input(&mut self);

    fn scroll_to_bottom(&mut self) {}
}

/// In-memory view holding the transcript and input state.
#[derive(Debug, Clone)]
pub struct Transcript {
    pub entries: Vec<TranscriptEntry>,
    pub input: String,
    pub input_enabled: bool,
    pub focused: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            input: String::new(),
            input_enabled: true,
            focused: false,
        }
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }

    pub fn has_loading(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| matches!(entry.body, EntryBody::Loading(_)))
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatView for Transcript {
    fn append(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
    }

    fn remove(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
        if !enabled {
            self.focused = false;
        }
    }

    fn input_text(&self) -> String {
        self.input.clone()
    }

    fn push_input(&mut self, text: &str) {
        self.input.push_str(text);
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn focus_input(&mut self) {
        self.focused = true;
    }
}
