pub mod view;

pub use view::{ChatView, EntryBody, Sender, Transcript, TranscriptEntry};

use crate::formatter;
use crate::resilience::with_timeout;
use crate::security::normalize_message;
use crate::transport::{ChatRequest, ChatTransport};
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use uuid::Uuid;

pub const GREETING: &str = "Hello! I am your AI Team with DISCUSSION capabilities:\n\n\
🎯 Project Manager - Coordinates & synthesizes\n\
🏗️ AI Architect - Technical expertise\n\
💼 Domain Expert - Business perspective\n\n\
Agents will DISCUSS your question, building on each other's insights. \
This takes 30-45 seconds but provides deeper analysis!\n\nAsk me anything!";

pub const LOADING_MESSAGE: &str = "Team is discussing... (this may take 30-45 seconds)";

pub const TIMEOUT_MESSAGE: &str =
    "Response took too long. The AI team might be processing a complex request. Please try again.";

pub const FAILURE_PREFIX: &str = "Error: Could not connect to AI team. ";

/// Trailing marker on a line-oriented surface that continues the message.
pub const LINE_CONTINUATION: char = '\\';

/// Only responses containing this marker are offered to the formatter.
const COMPOSITE_HINT: &str = "===";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Bounded wait, multi-agent formatting.
    Enhanced { timeout: Duration },
    /// Transport default wait, plain-text rendering.
    Legacy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input or input already disabled. Nothing was shown or sent.
    Ignored,
    Answered,
    TimedOut,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: Key, shift: bool) -> Self {
        Self { key, shift }
    }

    pub fn enter() -> Self {
        Self::new(Key::Enter, false)
    }

    pub fn shift_enter() -> Self {
        Self::new(Key::Enter, true)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// The key submitted the input; the surface must not insert a newline.
    Submitted(SubmitOutcome),
    /// The surface applies its native behavior (Shift+Enter inserts a newline).
    Default,
}

impl KeyAction {
    pub fn prevents_default(&self) -> bool {
        matches!(self, KeyAction::Submitted(_))
    }
}

pub struct ChatController<T: ChatTransport, V: ChatView> {
    transport: T,
    view: V,
    variant: Variant,
    input_enabled: bool,
    loading: Option<Uuid>,
}

impl<T: ChatTransport, V: ChatView> ChatController<T, V> {
    pub fn new(transport: T, view: V, variant: Variant) -> Self {
        Self {
            transport,
            view,
            variant,
            input_enabled: true,
            loading: None,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn is_input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Append the greeting. No request is made.
    pub fn greet(&mut self) {
        self.greet_with(GREETING);
    }

    pub fn greet_with(&mut self, text: &str) {
        self.append(Sender::Assistant, EntryBody::Text(text.to_string()));
    }

    pub async fn submit(&mut self, message: &str) -> SubmitOutcome {
        if !self.input_enabled {
            debug!(target: "request", "submission while busy ignored");
            return SubmitOutcome::Ignored;
        }
        let message = match normalize_message(message) {
            Ok(message) => message.to_string(),
            Err(_) => return SubmitOutcome::Ignored,
        };

        self.set_input_enabled(false);
        self.append(Sender::User, EntryBody::Text(message.clone()));
        self.view.clear_input();
        self.show_loading();

        crate::log_request!(info, chars = message.chars().count(), "submitting chat message");
        let started = Instant::now();
        let request = ChatRequest { message };
        let result = match self.variant {
            Variant::Enhanced { timeout } => with_timeout(timeout, self.transport.send(&request)).await,
            Variant::Legacy => self.transport.send(&request).await,
        };
        let elapsed_ms = started.elapsed().as_millis() as u64;

        self.remove_loading();
        let outcome = match result {
            Ok(response) => {
                crate::log_request!(info, elapsed_ms, chars = response.response.len(), "response received");
                let body = self.response_body(response.response);
                self.append(Sender::Assistant, body);
                SubmitOutcome::Answered
            }
            Err(err) if err.is_timeout() => {
                warn!(target: "request", elapsed_ms, "chat request timed out");
                self.append(Sender::Assistant, EntryBody::Text(TIMEOUT_MESSAGE.to_string()));
                SubmitOutcome::TimedOut
            }
            Err(err) => {
                warn!(target: "request", elapsed_ms, error = %err, "chat request failed");
                self.append(Sender::Assistant, EntryBody::Text(format!("{FAILURE_PREFIX}{err}")));
                SubmitOutcome::Failed
            }
        };

        self.set_input_enabled(true);
        self.view.focus_input();
        outcome
    }

    /// Enter alone submits the current input; anything else is left to the surface.
    pub async fn on_key_down(&mut self, key: KeyPress) -> KeyAction {
        match key {
            KeyPress { key: Key::Enter, shift: false } => {
                let text = self.view.input_text();
                KeyAction::Submitted(self.submit(&text).await)
            }
            _ => KeyAction::Default,
        }
    }

    /// Feed one line from a line-oriented surface such as a terminal.
    ///
    /// A line ending in [`LINE_CONTINUATION`] is typed followed by Shift+Enter,
    /// which inserts a newline; any other line is typed followed by Enter.
    pub async fn on_line(&mut self, line: &str) -> KeyAction {
        let (text, key) = match line.strip_suffix(LINE_CONTINUATION) {
            Some(partial) => (partial, KeyPress::shift_enter()),
            None => (line, KeyPress::enter()),
        };
        self.view.push_input(text);

        let action = self.on_key_down(key).await;
        if action == KeyAction::Default && key.key == Key::Enter {
            self.view.push_input("\n");
        }
        action
    }

    fn response_body(&self, raw: String) -> EntryBody {
        match self.variant {
            Variant::Enhanced { .. } if raw.contains(COMPOSITE_HINT) => {
                EntryBody::Document(formatter::format(&raw))
            }
            _ => EntryBody::Text(raw),
        }
    }

    fn append(&mut self, sender: Sender, body: EntryBody) -> Uuid {
        let entry = TranscriptEntry::new(sender, body);
        let id = entry.id;
        self.view.append(entry);
        self.view.scroll_to_bottom();
        id
    }

    fn show_loading(&mut self) {
        self.remove_loading();
        let id = self.append(Sender::Assistant, EntryBody::Loading(LOADING_MESSAGE.to_string()));
        self.loading = Some(id);
    }

    fn remove_loading(&mut self) {
        if let Some(id) = self.loading.take() {
            self.view.remove(id);
        }
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
        self.view.set_input_enabled(enabled);
    }
}
