use std::{fmt, time::Duration};

use crate::config::search_params::SearchParams;

/// Default provider base URL.
pub const DEFAULT_BASE_URL: &str = "https://serpapi.com";

/// Default per-call timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the SerpApi client.
///
/// The API key is process-wide configuration: loaded once at startup,
/// validated non-empty and handed to [`crate::client::SerpApiClient::new`].
/// `Debug` output masks the key.
#[derive(Clone)]
pub struct SerpConfig {
    /// Provider credential.
    pub api_key: String,

    /// Provider base URL without trailing slash, e.g. `"https://serpapi.com"`.
    pub base_url: String,

    /// Timeout applied to each provider call.
    pub timeout: Duration,

    /// Parameters forwarded with each primary search.
    pub search: SearchParams,
}

impl SerpConfig {
    /// Config with defaults for everything but the key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            search: SearchParams::default(),
        }
    }

    /// First characters of the key, safe for startup logs.
    pub fn masked_key(&self) -> String {
        let prefix: String = self.api_key.chars().take(4).collect();
        format!("{prefix}…")
    }
}

impl fmt::Debug for SerpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerpConfig")
            .field("api_key", &self.masked_key())
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("search", &self.search)
            .finish()
    }
}
