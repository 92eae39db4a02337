//! Client configuration.
//!
//! A `ClientConfig` comes from a JSON file (the `{ "accessToken": ... }` shape
//! older builds shipped as `config.json`), from `DROPNOTE_*` environment
//! variables, or from a file with environment overrides on top.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::retry::RetryPolicy;
use crate::util::{normalize_base_url, normalize_text_option};
use crate::{Error, Result};

pub const DEFAULT_API_BASE_URL: &str = "https://api.dropboxapi.com/2";
pub const DEFAULT_CONTENT_BASE_URL: &str = "https://content.dropboxapi.com/2";

const ENV_ACCESS_TOKEN: &str = "DROPNOTE_ACCESS_TOKEN";
const ENV_API_BASE_URL: &str = "DROPNOTE_API_BASE_URL";
const ENV_CONTENT_BASE_URL: &str = "DROPNOTE_CONTENT_BASE_URL";
const ENV_ROOT_PATH: &str = "DROPNOTE_ROOT_PATH";

const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;
const DEFAULT_SEARCH_MAX_RESULTS: usize = 20;

/// Resolved client configuration.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Bearer token for the remote store
    pub access_token: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_content_base_url")]
    pub content_base_url: String,
    /// Folder treated as the top of the note tree (`""` is the store root)
    #[serde(default)]
    pub root_path: String,
    #[serde(default)]
    pub retry: RetrySettings,
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    #[serde(default = "default_search_max_results")]
    pub search_max_results: usize,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ClientConfig")
            .field("access_token", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .field("content_base_url", &self.content_base_url)
            .field("root_path", &self.root_path)
            .field("retry", &self.retry)
            .field("search_debounce_ms", &self.search_debounce_ms)
            .field("search_max_results", &self.search_max_results)
            .finish()
    }
}

/// Retry tuning as stored on disk.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RetrySettings {
    pub initial_delay_ms: u64,
    pub max_retries: u32,
    pub busy_threshold_ms: u64,
}

impl Default for RetrySettings {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            initial_delay_ms: duration_ms(policy.initial_delay),
            max_retries: policy.max_retries,
            busy_threshold_ms: duration_ms(policy.busy_threshold),
        }
    }
}

impl RetrySettings {
    pub const fn policy(&self) -> RetryPolicy {
        RetryPolicy {
            initial_delay: Duration::from_millis(self.initial_delay_ms),
            max_retries: self.max_retries,
            busy_threshold: Duration::from_millis(self.busy_threshold_ms),
        }
    }
}

impl ClientConfig {
    /// Config with defaults for everything but the token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            api_base_url: default_api_base_url(),
            content_base_url: default_content_base_url(),
            root_path: String::new(),
            retry: RetrySettings::default(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            search_max_results: DEFAULT_SEARCH_MAX_RESULTS,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Returns `Ok(None)` when no access token is set.
    pub fn from_env() -> Result<Option<Self>> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Option<Self>> {
        let Some(token) = normalize_text_option(lookup(ENV_ACCESS_TOKEN)) else {
            return Ok(None);
        };
        Self::new(token).with_overrides(lookup).validated().map(Some)
    }

    /// Parse a JSON config document.
    pub fn from_json(payload: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(payload)?;
        config.validated()
    }

    /// Read and parse a JSON config file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let payload = std::fs::read_to_string(path)?;
        Self::from_json(&payload).map_err(|error| match error {
            Error::Serialization(error) => {
                Error::Config(format!("invalid config file {}: {error}", path.display()))
            }
            other => other,
        })
    }

    /// Apply `DROPNOTE_*` overrides on top of this config.
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(token) = normalize_text_option(lookup(ENV_ACCESS_TOKEN)) {
            self.access_token = token;
        }
        if let Some(url) = normalize_text_option(lookup(ENV_API_BASE_URL)) {
            self.api_base_url = url;
        }
        if let Some(url) = normalize_text_option(lookup(ENV_CONTENT_BASE_URL)) {
            self.content_base_url = url;
        }
        if let Some(root) = lookup(ENV_ROOT_PATH) {
            self.root_path = root;
        }
        self
    }

    /// Normalize fields and reject unusable values.
    pub fn validated(mut self) -> Result<Self> {
        self.access_token = normalize_text_option(Some(self.access_token))
            .ok_or_else(|| Error::Config("accessToken must not be empty".to_string()))?;
        self.api_base_url =
            normalize_base_url(&self.api_base_url, "apiBaseUrl").map_err(Error::Config)?;
        self.content_base_url =
            normalize_base_url(&self.content_base_url, "contentBaseUrl").map_err(Error::Config)?;
        self.root_path = normalize_root_path(&self.root_path);
        if self.search_max_results == 0 {
            return Err(Error::Config(
                "searchMaxResults must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }

    pub const fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

fn normalize_root_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_content_base_url() -> String {
    DEFAULT_CONTENT_BASE_URL.to_string()
}

const fn default_search_debounce_ms() -> u64 {
    DEFAULT_SEARCH_DEBOUNCE_MS
}

const fn default_search_max_results() -> usize {
    DEFAULT_SEARCH_MAX_RESULTS
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
