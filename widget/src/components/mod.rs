//! UI components.

pub mod support_chat;
