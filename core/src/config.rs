//! Remote API configuration shared by every front end.

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 15_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Base path every endpoint is appended to, without a trailing slash.
    pub api_base_url: String,
    /// `None` waits for the remote call indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            request_timeout: Some(Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS)),
        }
    }
}

impl WidgetConfig {
    #[must_use]
    pub fn new(api_base_url: &str) -> Self {
        Self { api_base_url: normalize_base_url(api_base_url), ..Self::default() }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Build config from optional raw overrides, e.g. values read from page
    /// `<meta>` tags.
    ///
    /// Blank or unparsable values fall back to the defaults. A timeout of
    /// `0` disables the timeout.
    #[must_use]
    pub fn from_overrides(base_url: Option<&str>, timeout_ms: Option<&str>) -> Self {
        let api_base_url = base_url
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map_or_else(|| DEFAULT_API_BASE_URL.to_owned(), normalize_base_url);
        let timeout_ms = timeout_ms
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);
        let request_timeout = (timeout_ms > 0).then(|| Duration::from_millis(timeout_ms));
        Self { api_base_url, request_timeout }
    }

    /// Full URL for an endpoint path such as [`crate::api::CHAT_PATH`].
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
