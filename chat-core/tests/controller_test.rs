/// Tests for the chat controller submission flow

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chat_core::controller::{
        ChatController, ChatView, EntryBody, KeyAction, KeyPress, Key, Sender, SubmitOutcome,
        Transcript, TranscriptEntry, Variant, FAILURE_PREFIX, GREETING, TIMEOUT_MESSAGE,
    };
    use chat_core::error::{ChatError, Result};
    use chat_core::formatter::RenderDocument;
    use chat_core::transport::{ChatRequest, ChatResponse, ChatTransport};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use uuid::Uuid;

    #[derive(Clone)]
    enum Behavior {
        Reply(String),
        Status(u16),
        Hang(Duration),
    }

    #[derive(Clone)]
    struct FakeTransport {
        behavior: Behavior,
        calls: Arc<Mutex<Vec<ChatRequest>>>,
    }

    impl FakeTransport {
        fn new(behavior: Behavior) -> Self {
            Self {
                behavior,
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn calls(&self) -> Vec<ChatRequest> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatTransport for FakeTransport {
        async fn send(&self, request: &ChatRequest) -> Result<ChatResponse> {
            self.calls.lock().unwrap().push(request.clone());
            match &self.behavior {
                Behavior::Reply(text) => Ok(ChatResponse { response: text.clone() }),
                Behavior::Status(code) => Err(ChatError::Status(*code)),
                Behavior::Hang(duration) => {
                    tokio::time::sleep(*duration).await;
                    Ok(ChatResponse { response: "late answer".to_string() })
                }
            }
        }
    }

    const ENHANCED: Variant = Variant::Enhanced { timeout: Duration::from_secs(60) };

    fn composite_reply() -> String {
        format!(
            "🎯 PROJECT MANAGER\n{rule}\nSplit the work.\n\n{delim}\n🏗️ AI ARCHITECT\n{rule}\nUse a queue.\n",
            rule = "-".repeat(60),
            delim = "=".repeat(60)
        )
    }

    fn controller(transport: &FakeTransport, variant: Variant) -> ChatController<FakeTransport, Transcript> {
        ChatController::new(transport.clone(), Transcript::new(), variant)
    }

    fn last_text(view: &Transcript) -> &str {
        match &view.last().unwrap().body {
            EntryBody::Text(text) => text,
            other => panic!("expected text entry, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_greeting_without_network() {
        let transport = FakeTransport::new(Behavior::Reply(String::new()));
        let mut chat = controller(&transport, ENHANCED);
        chat.greet();

        let view = chat.view();
        assert_eq!(view.entries.len(), 1);
        assert_eq!(view.entries[0].sender, Sender::Assistant);
        // Greeting mentions every glyph but stays plain text.
        assert_eq!(view.entries[0].body, EntryBody::Text(GREETING.to_string()));
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_whitespace_submission_ignored() {
        let transport = FakeTransport::new(Behavior::Reply("hi".to_string()));
        let mut chat = controller(&transport, ENHANCED);

        assert_eq!(chat.submit("   ").await, SubmitOutcome::Ignored);
        assert!(chat.view().entries.is_empty());
        assert!(!chat.view().has_loading());
        assert!(transport.calls().is_empty());
        assert!(chat.is_input_enabled());
    }

    #[tokio::test]
    async fn test_composite_reply_is_formatted() {
        let transport = FakeTransport::new(Behavior::Reply(composite_reply()));
        let mut chat = controller(&transport, ENHANCED);
        chat.view_mut().set_input("  How do we scale?  ");

        let text = chat.view().input_text();
        assert_eq!(chat.submit(&text).await, SubmitOutcome::Answered);
        assert_eq!(transport.calls(), vec![ChatRequest { message: "How do we scale?".to_string() }]);

        let view = chat.view();
        assert_eq!(view.entries.len(), 2);
        assert_eq!(view.entries[0].sender, Sender::User);
        assert_eq!(view.entries[0].body, EntryBody::Text("How do we scale?".to_string()));
        match &view.entries[1].body {
            EntryBody::Document(RenderDocument::Composite(contributions)) => {
                assert_eq!(contributions.len(), 2);
                assert_eq!(contributions[1].body, "Use a queue.");
            }
            other => panic!("expected composite document, got {other:?}"),
        }
        assert!(view.input.is_empty());
        assert!(view.input_enabled);
        assert!(view.focused);
        assert!(!view.has_loading());
    }

    #[tokio::test]
    async fn test_reply_without_delimiter_hint_is_text() {
        let transport = FakeTransport::new(Behavior::Reply("🎯 PROJECT MANAGER says hello".to_string()));
        let mut chat = controller(&transport, ENHANCED);

        chat.submit("hi").await;
        assert_eq!(last_text(chat.view()), "🎯 PROJECT MANAGER says hello");
    }

    #[tokio::test]
    async fn test_legacy_never_formats() {
        let transport = FakeTransport::new(Behavior::Reply(composite_reply()));
        let mut chat = controller(&transport, Variant::Legacy);

        assert_eq!(chat.submit("hi").await, SubmitOutcome::Answered);
        assert_eq!(last_text(chat.view()), composite_reply());
    }

    #[tokio::test]
    async fn test_server_error_message() {
        let transport = FakeTransport::new(Behavior::Status(500));
        let mut chat = controller(&transport, ENHANCED);

        assert_eq!(chat.submit("hi").await, SubmitOutcome::Failed);
        assert_eq!(last_text(chat.view()), format!("{FAILURE_PREFIX}Server error: 500"));
        assert!(chat.view().input_enabled);
        assert!(chat.view().focused);
        assert!(!chat.view().has_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_message_and_recovery() {
        let transport = FakeTransport::new(Behavior::Hang(Duration::from_secs(120)));
        let mut chat = controller(&transport, ENHANCED);

        assert_eq!(chat.submit("complex question").await, SubmitOutcome::TimedOut);
        assert_eq!(last_text(chat.view()), TIMEOUT_MESSAGE);
        assert!(!last_text(chat.view()).starts_with(FAILURE_PREFIX));
        assert!(chat.is_input_enabled());
        assert!(chat.view().input_enabled);
        assert!(!chat.view().has_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_legacy_waits_past_enhanced_bound() {
        let transport = FakeTransport::new(Behavior::Hang(Duration::from_secs(120)));
        let mut chat = controller(&transport, Variant::Legacy);

        assert_eq!(chat.submit("complex question").await, SubmitOutcome::Answered);
        assert_eq!(last_text(chat.view()), "late answer");
    }

    #[tokio::test]
    async fn test_enter_submits_shift_enter_does_not() {
        let transport = FakeTransport::new(Behavior::Reply("ok".to_string()));
        let mut chat = controller(&transport, ENHANCED);
        chat.view_mut().set_input("first line");

        let action = chat.on_key_down(KeyPress::shift_enter()).await;
        assert_eq!(action, KeyAction::Default);
        assert!(!action.prevents_default());
        assert!(transport.calls().is_empty());

        let action = chat.on_key_down(KeyPress::new(Key::Char('x'), false)).await;
        assert_eq!(action, KeyAction::Default);

        let action = chat.on_key_down(KeyPress::enter()).await;
        assert_eq!(action, KeyAction::Submitted(SubmitOutcome::Answered));
        assert!(action.prevents_default());
        assert_eq!(transport.calls()[0].message, "first line");
    }

    #[tokio::test]
    async fn test_enter_on_blank_input_still_prevents_newline() {
        let transport = FakeTransport::new(Behavior::Reply("ok".to_string()));
        let mut chat = controller(&transport, ENHANCED);

        let action = chat.on_key_down(KeyPress::enter()).await;
        assert_eq!(action, KeyAction::Submitted(SubmitOutcome::Ignored));
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_line_continuation_builds_multiline_message() {
        let transport = FakeTransport::new(Behavior::Reply("ok".to_string()));
        let mut chat = controller(&transport, ENHANCED);

        assert_eq!(chat.on_line("first line\\").await, KeyAction::Default);
        assert_eq!(chat.view().input, "first line\n");
        assert!(transport.calls().is_empty());

        assert_eq!(chat.on_line("second line").await, KeyAction::Submitted(SubmitOutcome::Answered));
        assert_eq!(transport.calls()[0].message, "first line\nsecond line");
        assert!(chat.view().input.is_empty());
    }

    #[tokio::test]
    async fn test_blank_line_submits_nothing() {
        let transport = FakeTransport::new(Behavior::Reply("ok".to_string()));
        let mut chat = controller(&transport, ENHANCED);

        assert_eq!(chat.on_line("").await, KeyAction::Submitted(SubmitOutcome::Ignored));
        assert_eq!(chat.on_line("\\").await, KeyAction::Default);
        assert_eq!(chat.view().input, "\n");
        assert!(transport.calls().is_empty());
    }

    /// Records the order in which the controller touches each surface.
    #[derive(Default)]
    struct EventView {
        events: Vec<String>,
        input: String,
    }

    impl ChatView for EventView {
        fn append(&mut self, entry: TranscriptEntry) {
            let kind = match entry.body {
                EntryBody::Loading(_) => "loading",
                EntryBody::Document(_) => "document",
                EntryBody::Text(_) => entry.sender.label(),
            };
            self.events.push(format!("append:{kind}"));
        }

        fn remove(&mut self, _id: Uuid) -> bool {
            self.events.push("remove".to_string());
            true
        }

        fn set_input_enabled(&mut self, enabled: bool) {
            self.events.push(if enabled { "enable" } else { "disable" }.to_string());
        }

        fn input_text(&self) -> String {
            self.input.clone()
        }

        fn push_input(&mut self, text: &str) {
            self.input.push_str(text);
        }

        fn clear_input(&mut self) {
            self.events.push("clear".to_string());
        }

        fn focus_input(&mut self) {
            self.events.push("focus".to_string());
        }
    }

    #[tokio::test]
    async fn test_surface_update_order() {
        let transport = FakeTransport::new(Behavior::Status(503));
        let mut chat = ChatController::new(transport, EventView::default(), ENHANCED);

        chat.submit("hello").await;
        assert_eq!(
            chat.view().events,
            vec![
                "disable",
                "append:You",
                "clear",
                "append:loading",
                "remove",
                "append:AI Team",
                "enable",
                "focus",
            ]
        );
    }
}
