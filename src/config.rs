//! Session configuration resolved once at startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Environment variable holding the backend base URL.
pub const BACKEND_URL_VAR: &str = "CHATBOT_BACKEND_URL";

/// Path of the chat endpoint, relative to the backend base URL.
pub const CHAT_PATH: &str = "api/chat";

/// Errors produced while resolving configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing config: env var {var} not set")]
    MissingVar { var: String },

    /// A configuration value was present but unusable.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Read-only configuration shared by every component that talks to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    backend_url: String,
}

impl SessionConfig {
    /// Build config from environment variables.
    ///
    /// Required:
    /// - `CHATBOT_BACKEND_URL`: backend base URL, e.g. `https://support.example.com/`
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(BACKEND_URL_VAR).map_err(|_| ConfigError::MissingVar { var: BACKEND_URL_VAR.into() })?;
        let config = Self::new(&raw)?;
        tracing::info!(backend_url = %config.backend_url, "chat session config resolved");
        Ok(config)
    }

    /// Build config from an explicit base URL.
    pub fn new(backend_url: &str) -> Result<Self, ConfigError> {
        Ok(Self { backend_url: normalize_base_url(backend_url)? })
    }

    /// Build config from an optional compile-time value, targeting the page
    /// origin when absent or blank.
    pub fn from_value_or_origin(raw: Option<&str>) -> Self {
        let backend_url = raw
            .and_then(|v| normalize_base_url(v).ok())
            .unwrap_or_else(|| "/".to_owned());
        Self { backend_url }
    }

    /// Backend base URL, always ending with `/`.
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Full URL of the chat endpoint.
    pub fn chat_endpoint(&self) -> String {
        format!("{}{CHAT_PATH}", self.backend_url)
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{BACKEND_URL_VAR} is empty")));
    }
    if trimmed.ends_with('/') {
        Ok(trimmed.to_owned())
    } else {
        Ok(format!("{trimmed}/"))
    }
}
