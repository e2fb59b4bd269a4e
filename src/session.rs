//! Chat session controller: runs one exchange at a time against a transport.
//!
//! DESIGN
//! ======
//! `submit` is split in two. The synchronous half validates the text, appends
//! the user message, and marks the conversation pending before returning an
//! [`Exchange`]. The asynchronous half ([`Exchange::resolve`]) performs the
//! request and appends the reply or the fallback.
//!
//! ERROR HANDLING
//! ==============
//! Transport errors never reach the caller. They are logged and replaced by
//! the fixed fallback message. The pending flag is cleared on every exit
//! path, including when an exchange is dropped before it resolves.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::conversation::ConversationState;
use crate::message::Message;
use crate::transport::{ChatError, ChatTransport};

/// Map the outcome of an exchange to the assistant message it produces.
pub fn reply_for(outcome: Result<String, ChatError>) -> Message {
    match outcome {
        Ok(text) => Message::assistant(text),
        Err(_) => Message::fallback(),
    }
}

/// Send `text` through `transport` and return the assistant message it
/// produces. Failures are logged and replaced by the fallback reply.
///
/// Does not touch conversation state; callers append the returned message.
pub async fn run_exchange<T: ChatTransport + ?Sized>(transport: &T, text: &str) -> Message {
    tracing::debug!(chars = text.len(), "chat exchange started");
    let outcome = transport.send(text).await;
    if let Err(e) = &outcome {
        tracing::warn!(error = %e, "chat exchange failed");
    }
    reply_for(outcome)
}

/// Handle to one widget's conversation and the transport it talks through.
///
/// Cheap to clone; clones share the same conversation.
#[derive(Clone)]
pub struct ChatSession {
    state: Rc<RefCell<ConversationState>>,
    transport: Rc<dyn ChatTransport>,
}

impl ChatSession {
    pub fn new(transport: impl ChatTransport + 'static) -> Self {
        Self { state: Rc::new(RefCell::new(ConversationState::new())), transport: Rc::new(transport) }
    }

    /// Build a session posting to the configured backend over HTTP.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_config(config: &crate::config::SessionConfig) -> Result<Self, ChatError> {
        Ok(Self::new(crate::transport::HttpTransport::new(config)?))
    }

    /// Copy of the current conversation state.
    pub fn snapshot(&self) -> ConversationState {
        self.state.borrow().clone()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.state.borrow().messages().to_vec()
    }

    pub fn is_pending(&self) -> bool {
        self.state.borrow().is_pending()
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open
    }

    pub fn draft(&self) -> String {
        self.state.borrow().draft.clone()
    }

    pub fn set_draft(&self, draft: impl Into<String>) {
        self.state.borrow_mut().set_draft(draft);
    }

    pub fn toggle_panel(&self) {
        self.state.borrow_mut().toggle_panel();
    }

    pub fn close_panel(&self) {
        self.state.borrow_mut().close_panel();
    }

    pub fn pointer_down(&self, inside_widget: bool) {
        self.state.borrow_mut().pointer_down(inside_widget);
    }

    /// Submit `text`. Returns `None` without touching state when the text is
    /// blank or an exchange is already in flight.
    pub fn submit(&self, text: &str) -> Option<Exchange> {
        let text = self.state.borrow_mut().begin_submit(text)?;
        Some(Exchange { state: Rc::clone(&self.state), transport: Rc::clone(&self.transport), text, settled: false })
    }

    /// Submit the current draft.
    pub fn submit_draft(&self) -> Option<Exchange> {
        let draft = self.draft();
        self.submit(&draft)
    }
}

/// An in-flight exchange. The user message is already in the transcript.
///
/// Dropping it unresolved clears the pending flag without appending a reply.
#[must_use = "an exchange does nothing until resolved"]
pub struct Exchange {
    state: Rc<RefCell<ConversationState>>,
    transport: Rc<dyn ChatTransport>,
    text: String,
    settled: bool,
}

impl Exchange {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Send the message and append the reply (or the fallback).
    /// Returns the appended assistant message.
    pub async fn resolve(mut self) -> Message {
        let reply = run_exchange(self.transport.as_ref(), &self.text).await;
        self.state.borrow_mut().finish_exchange(reply.clone());
        self.settled = true;
        reply
    }
}

impl Drop for Exchange {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        if let Ok(mut state) = self.state.try_borrow_mut() {
            state.abandon_exchange();
        }
    }
}
