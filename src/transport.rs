//! Chat transport: one POST to the backend chat endpoint per exchange.
//!
//! The trait is `?Send` so browser implementations built on `gloo-net` can
//! implement it alongside the native `reqwest` one below.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by a chat exchange.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The request could not be sent or the connection failed.
    #[error("chat request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("chat response error: status {status}")]
    Status { status: u16 },

    /// The response body was not the expected JSON shape.
    #[error("chat response parse failed: {0}")]
    Parse(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    /// No transport is available in this environment.
    #[error("chat transport unavailable: {0}")]
    Unavailable(String),
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Request body sent to `api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
}

/// Response body expected from `api/chat`. Extra fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatReply {
    pub response: String,
}

/// Parse a raw response body into the assistant's reply text.
pub fn parse_reply(body: &str) -> Result<String, ChatError> {
    serde_json::from_str::<ChatReply>(body)
        .map(|reply| reply.response)
        .map_err(|e| ChatError::Parse(e.to_string()))
}

// =============================================================================
// TRANSPORT
// =============================================================================

/// Sends one user message to the backend and returns the reply text.
#[async_trait::async_trait(?Send)]
pub trait ChatTransport {
    async fn send(&self, message: &str) -> Result<String, ChatError>;
}

/// Native HTTP transport backed by `reqwest`.
///
/// No request timeout is configured: an exchange that never resolves keeps
/// the conversation pending until the session is dropped.
#[cfg(not(target_arch = "wasm32"))]
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl HttpTransport {
    /// Build a transport posting to `config.chat_endpoint()`.
    pub fn new(config: &crate::config::SessionConfig) -> Result<Self, ChatError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ChatError::ClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint: config.chat_endpoint() })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait(?Send)]
impl ChatTransport for HttpTransport {
    async fn send(&self, message: &str) -> Result<String, ChatError> {
        let body = ChatRequest { message: message.to_owned() };
        let resp = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ChatError::Status { status: status.as_u16() });
        }

        let text = resp.text().await.map_err(|e| ChatError::Request(e.to_string()))?;
        parse_reply(&text)
    }
}
