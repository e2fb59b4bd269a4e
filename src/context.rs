//! Page-wide shared context handed to descendant components.
//!
//! Constructed once at application start. The config half is read-only and
//! shared by `Arc`; the session flags change only through their setters.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::sync::Arc;

use crate::config::SessionConfig;

/// Login flags for the current visitor. Not consumed by the chat loop.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionFlags {
    is_logged_in: bool,
    user_name: String,
}

impl SessionFlags {
    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn set_logged_in(&mut self, logged_in: bool) {
        self.is_logged_in = logged_in;
    }

    pub fn set_user_name(&mut self, name: impl Into<String>) {
        self.user_name = name.into();
    }
}

/// Shared configuration plus session flags.
#[derive(Clone, Debug)]
pub struct AppContext {
    config: Arc<SessionConfig>,
    pub session: SessionFlags,
}

impl AppContext {
    pub fn new(config: SessionConfig) -> Self {
        Self { config: Arc::new(config), session: SessionFlags::default() }
    }

    pub fn config(&self) -> &Arc<SessionConfig> {
        &self.config
    }

    pub fn backend_url(&self) -> &str {
        self.config.backend_url()
    }
}
