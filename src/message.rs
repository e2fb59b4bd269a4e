//! Transcript message types.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use serde::{Deserialize, Serialize};

/// Text of the assistant message every conversation starts with.
pub const GREETING: &str = "Hello! How can I help you?";

/// Text shown in place of a reply when an exchange fails for any reason.
pub const FALLBACK_REPLY: &str = "Sorry, something went wrong. Please try again.";

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    Assistant,
}

/// A single transcript entry. Never mutated after it is appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub origin: Origin,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self { origin: Origin::User, text: text.into() }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self { origin: Origin::Assistant, text: text.into() }
    }

    /// The seeded assistant greeting.
    pub fn greeting() -> Self {
        Self::assistant(GREETING)
    }

    /// The fixed assistant reply used for every failed exchange.
    pub fn fallback() -> Self {
        Self::assistant(FALLBACK_REPLY)
    }

    pub fn is_user(&self) -> bool {
        self.origin == Origin::User
    }
}
