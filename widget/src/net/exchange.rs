//! Exchanges scoped to one widget instance.
//!
//! Each submission runs as a detached local task. The scope's `alive` flag
//! is cleared in `on_cleanup`, so a reply that lands after teardown is
//! discarded instead of written into disposed state.

#[cfg(test)]
#[path = "exchange_test.rs"]
mod exchange_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chatbot::session::run_exchange;
use chatbot::{ChatTransport, Message};

/// Lifetime guard shared by the widget and the tasks it spawns.
#[derive(Clone, Debug)]
pub struct ExchangeScope {
    alive: Arc<AtomicBool>,
}

impl Default for ExchangeScope {
    fn default() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }
}

impl ExchangeScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the owning widget as torn down.
    pub fn close(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Run one exchange. Returns the assistant message to append, or `None`
    /// when the widget was torn down while the request was in flight.
    pub async fn run<T: ChatTransport + ?Sized>(&self, transport: &T, text: &str) -> Option<Message> {
        let reply = run_exchange(transport, text).await;
        self.is_alive().then_some(reply)
    }
}
