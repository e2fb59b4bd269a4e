use super::*;
use chatbot::transport::ChatError;
use futures::executor::block_on;

struct FixedTransport(Result<&'static str, u16>);

#[async_trait::async_trait(?Send)]
impl ChatTransport for FixedTransport {
    async fn send(&self, _message: &str) -> Result<String, ChatError> {
        self.0.map(str::to_owned).map_err(|status| ChatError::Status { status })
    }
}

/// Closes the scope while the request is in flight.
struct ClosingTransport(ExchangeScope);

#[async_trait::async_trait(?Send)]
impl ChatTransport for ClosingTransport {
    async fn send(&self, _message: &str) -> Result<String, ChatError> {
        self.0.close();
        Ok("too late".to_owned())
    }
}

// =============================================================
// Lifetime
// =============================================================

#[test]
fn new_scope_is_alive() {
    assert!(ExchangeScope::new().is_alive());
}

#[test]
fn close_is_seen_by_clones() {
    let scope = ExchangeScope::new();
    let task_copy = scope.clone();
    scope.close();
    assert!(!task_copy.is_alive());
}

// =============================================================
// run
// =============================================================

#[test]
fn run_returns_reply_while_alive() {
    let scope = ExchangeScope::new();
    let reply = block_on(scope.run(&FixedTransport(Ok("hello!")), "hi"));
    assert_eq!(reply, Some(Message::assistant("hello!")));
}

#[test]
fn run_returns_fallback_on_server_error() {
    let scope = ExchangeScope::new();
    let reply = block_on(scope.run(&FixedTransport(Err(500)), "hi"));
    assert_eq!(reply, Some(Message::fallback()));
}

#[test]
fn run_discards_reply_after_teardown() {
    let scope = ExchangeScope::new();
    let transport = ClosingTransport(scope.clone());
    assert_eq!(block_on(scope.run(&transport, "hi")), None);
}

#[test]
fn run_on_closed_scope_discards_reply() {
    let scope = ExchangeScope::new();
    scope.close();
    assert_eq!(block_on(scope.run(&FixedTransport(Ok("hello!")), "hi")), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_gloo_transport_yields_fallback() {
    let scope = ExchangeScope::new();
    let reply = block_on(scope.run(&crate::net::api::GlooTransport::new("/api/chat"), "hi"));
    assert_eq!(reply, Some(Message::fallback()));
}
