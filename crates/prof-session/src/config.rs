//! Configuration for the game master session.

use std::env;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini REST endpoint root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables checked for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Connection settings for the narrative service.
#[derive(Clone)]
pub struct SessionConfig {
    /// API key sent with every request.
    pub api_key: Option<String>,
    /// Model name.
    pub model: String,
    /// Endpoint root, without a trailing slash.
    pub base_url: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl SessionConfig {
    /// Build a configuration from environment variables.
    ///
    /// - `GEMINI_API_KEY` or `API_KEY`: API key
    /// - `PROFEXE_MODEL`: model name (default: `gemini-2.5-flash`)
    /// - `PROFEXE_BASE_URL`: endpoint root
    pub fn from_env() -> Self {
        let mut config = Self {
            api_key: API_KEY_VARS.iter().find_map(|key| read_env(key)),
            ..Self::default()
        };
        if let Some(model) = read_env("PROFEXE_MODEL") {
            config.model = model;
        }
        if let Some(url) = read_env("PROFEXE_BASE_URL") {
            config = config.with_base_url(url);
        }
        config
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the endpoint root (a trailing slash is dropped).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

/// Read a non-empty environment variable.
fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
