//! # chatbot
//!
//! UI-independent core of the customer-support chat widget.
//!
//! DESIGN
//! ======
//! The widget is split into a pure conversation store, a session controller
//! that runs one request/response exchange at a time, and a transport seam
//! so the same loop drives both the browser (`gloo-net`, in `chatbot-widget`)
//! and native code (`reqwest`, here).

pub mod config;
pub mod context;
pub mod conversation;
pub mod message;
pub mod session;
pub mod transport;

pub use config::{ConfigError, SessionConfig};
pub use context::{AppContext, SessionFlags};
pub use conversation::ConversationState;
pub use message::{Message, Origin};
pub use session::{ChatSession, Exchange};
pub use transport::{ChatError, ChatTransport};
