//! Chat endpoint access from the browser.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: the transport reports itself unavailable, which the
//! session turns into the fallback reply.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as a `ChatError`; nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use chatbot::ChatTransport;
use chatbot::transport::ChatError;

/// `ChatTransport` over the browser `fetch` API.
#[derive(Clone, Debug)]
pub struct GlooTransport {
    endpoint: String,
}

impl GlooTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait(?Send)]
impl ChatTransport for GlooTransport {
    async fn send(&self, message: &str) -> Result<String, ChatError> {
        #[cfg(feature = "csr")]
        {
            let body = chatbot::transport::ChatRequest { message: message.to_owned() };
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(&body)
                .map_err(|e| ChatError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| ChatError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(ChatError::Status { status: resp.status() });
            }
            let text = resp.text().await.map_err(|e| ChatError::Request(e.to_string()))?;
            chatbot::transport::parse_reply(&text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = message;
            Err(ChatError::Unavailable(format!("no browser to reach {}", self.endpoint)))
        }
    }
}
