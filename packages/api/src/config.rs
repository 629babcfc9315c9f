//! # Client configuration
//!
//! Every backend call is made relative to one base URL. It comes from the
//! environment so the same build can talk to a local backend during
//! development and a deployed one in production.
//!
//! ## Resolution order
//!
//! 1. `WORKOUT_API_URL` from the process environment (native builds also load
//!    a `.env` file through `dotenvy` first).
//! 2. On `wasm32`, the value of `WORKOUT_API_URL` at compile time.
//! 3. The default, [`DEFAULT_API_URL`].
//!
//! Empty values count as unset.
//!
//! ## TOML form
//!
//! ```toml
//! [api]
//! url = "http://localhost:4000"
//!
//! [notifications]
//! duration_ms = 1500
//! ```
//!
//! Missing sections fall back to their defaults, so an empty file is the
//! default configuration.

use serde::{Deserialize, Serialize};

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:4000";

/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "WORKOUT_API_URL";

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for all backend calls, without a trailing slash.
    #[serde(default = "default_api_url")]
    pub url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
        }
    }
}

/// How long a notification stays on screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

fn default_duration_ms() -> u64 {
    1500
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
        }
    }
}

impl ClientConfig {
    /// Build a config from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let config = Self::default();
        match env_api_url() {
            Some(url) => config.with_api_url(url),
            None => config,
        }
    }

    /// Builder method to set the backend base URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api.url = normalize_url(&url.into());
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(s)?;
        config.api.url = normalize_url(&config.api.url);
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Backend base URL without a trailing slash.
    pub fn api_url(&self) -> &str {
        &self.api.url
    }
}

fn normalize_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        default_api_url()
    } else {
        trimmed.to_string()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn env_api_url() -> Option<String> {
    dotenvy::dotenv().ok();
    std::env::var(API_URL_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
fn env_api_url() -> Option<String> {
    option_env!("WORKOUT_API_URL")
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}
