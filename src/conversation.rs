//! Conversation store for the chat widget.
//!
//! DESIGN
//! ======
//! Plain data plus synchronous transitions. The browser widget keeps one of
//! these inside an `RwSignal`; native callers share it through `Rc<RefCell<_>>` in
//! [`crate::session::ChatSession`]. Nothing here performs I/O.
//!
//! The transcript is append-only and always starts with the assistant
//! greeting. `pending` is checked and set in the same call that appends the
//! user message, so a second submission can never slip in while an exchange
//! is in flight.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use crate::message::Message;

/// State of one widget instance: transcript, draft, panel and in-flight flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversationState {
    messages: Vec<Message>,
    pub draft: String,
    pub is_open: bool,
    pending: bool,
}

impl Default for ConversationState {
    fn default() -> Self {
        Self { messages: vec![Message::greeting()], draft: String::new(), is_open: false, pending: false }
    }
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Replace the draft. Allowed at any time, including mid-exchange.
    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Whether the send action should be enabled.
    pub fn can_send(&self) -> bool {
        !self.pending && !self.draft.trim().is_empty()
    }

    pub fn toggle_panel(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close_panel(&mut self) {
        self.is_open = false;
    }

    /// Pointer-down anywhere on the page. Closes the panel when the press
    /// lands outside the widget while it is open.
    pub fn pointer_down(&mut self, inside_widget: bool) {
        if self.is_open && !inside_widget {
            self.close_panel();
        }
    }

    /// Start an exchange for `text`.
    ///
    /// Returns `None` and leaves the state untouched when the text is blank
    /// or another exchange is in flight. Otherwise appends the user message,
    /// clears the draft, marks the exchange pending, and returns the text to
    /// send.
    pub fn begin_submit(&mut self, text: &str) -> Option<String> {
        if text.trim().is_empty() || self.pending {
            return None;
        }
        self.messages.push(Message::user(text));
        self.draft.clear();
        self.pending = true;
        Some(text.to_owned())
    }

    /// Start an exchange for the current draft.
    pub fn submit_draft(&mut self) -> Option<String> {
        let draft = self.draft.clone();
        self.begin_submit(&draft)
    }

    /// Finish the in-flight exchange with its reply (or the fallback).
    /// The pending flag is cleared after the message is appended.
    pub fn finish_exchange(&mut self, reply: Message) {
        self.messages.push(reply);
        self.pending = false;
    }

    /// Clear the pending flag without appending anything. Used when an
    /// exchange is dropped before it resolves.
    pub fn abandon_exchange(&mut self) {
        self.pending = false;
    }
}

/// Whether a key press in the draft field should submit.
///
/// Enter submits; Shift+Enter is left to the input's default behavior.
pub fn is_submit_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}
