//! Thin client for the SerpApi JSON endpoint.
//!
//! Two request types are issued, both against `GET {base_url}/search.json`:
//! - `engine=google`             — primary search with organic results and AI overview
//! - `engine=google_ai_overview` — deferred AI overview content by `page_token`
//!
//! # Examples
//!
//! ```no_run
//! use serp_api_service::client::SerpApiClient;
//! use serp_api_service::config::serp_config::SerpConfig;
//! use serp_api_service::provider::SearchProvider;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = SerpConfig::with_api_key("your-key");
//! let client = SerpApiClient::new(&cfg)?;
//! let resp = client.search("rust async traits", &cfg.search).await?;
//! println!("organic results: {}", resp.organic_results.len());
//! # Ok(()) }
//! ```

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::{
    config::{search_params::SearchParams, serp_config::SerpConfig},
    error_handler::{ConfigError, Result, SerpError, make_snippet, validate_http_endpoint},
    provider::SearchProvider,
    types::{AiOverviewPageResponse, SearchResponse, error_indicator},
};

/// SerpApi HTTP client. Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct SerpApiClient {
    http: reqwest::Client,
    api_key: String,
    url_search: String,
}

impl SerpApiClient {
    /// Creates a new client from validated config.
    ///
    /// # Errors
    /// - [`ConfigError::MissingVar`] if the API key is empty
    /// - [`ConfigError::InvalidFormat`] if the base URL is not http(s)
    /// - [`SerpError::Network`] if the HTTP client cannot be built
    pub fn new(cfg: &SerpConfig) -> Result<Self> {
        if cfg.api_key.trim().is_empty() {
            return Err(ConfigError::MissingVar("SERPAPI_KEY").into());
        }
        validate_http_endpoint("SERPAPI_BASE_URL", &cfg.base_url)?;

        let http = reqwest::Client::builder()
            .user_agent("overview-audit/0.1")
            .timeout(cfg.timeout)
            .gzip(true)
            .build()?;

        let base = cfg.base_url.trim_end_matches('/');
        debug!(base, timeout = ?cfg.timeout, "SerpApi client initialized");

        Ok(Self {
            http,
            api_key: cfg.api_key.clone(),
            url_search: format!("{base}/search.json"),
        })
    }

    async fn get_json<T>(&self, mut query: Vec<(&'static str, String)>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        query.push(("api_key", self.api_key.clone()));

        let resp = self.http.get(&self.url_search).query(&query).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        debug!(%status, bytes = body.len(), "SerpApi response received");

        decode_body(status, &body)
    }
}

impl SearchProvider for SerpApiClient {
    #[instrument(name = "serpapi_search", skip(self, params), fields(device = %params.device))]
    async fn search(&self, query: &str, params: &SearchParams) -> Result<SearchResponse> {
        self.get_json(search_query(query, params)).await
    }

    #[instrument(name = "serpapi_ai_overview", skip(self, page_token))]
    async fn fetch_ai_overview_page(&self, page_token: &str) -> Result<AiOverviewPageResponse> {
        self.get_json(vec![
            ("engine", "google_ai_overview".to_string()),
            ("page_token", page_token.to_string()),
        ])
        .await
    }
}

/// Query pairs for the primary search, without the credential.
pub fn search_query(query: &str, params: &SearchParams) -> Vec<(&'static str, String)> {
    vec![
        ("engine", "google".to_string()),
        ("q", query.to_string()),
        ("hl", params.hl.clone()),
        ("gl", params.gl.clone()),
        ("num", params.num.to_string()),
        ("device", params.device.to_string()),
        ("no_cache", params.no_cache.to_string()),
    ]
}

/// Turns a raw provider body into a typed response or a typed failure.
///
/// An `error` field wins over the HTTP status: SerpApi reports bad keys and
/// empty result pages with a JSON body on both 2xx and 4xx responses.
pub fn decode_body<T>(status: StatusCode, body: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) if !status.is_success() => {
            return Err(SerpError::HttpStatus {
                status,
                snippet: make_snippet(body),
            });
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(msg) = value.get("error").and_then(error_indicator) {
        return Err(SerpError::Provider(msg));
    }

    if !status.is_success() {
        return Err(SerpError::HttpStatus {
            status,
            snippet: make_snippet(body),
        });
    }

    Ok(serde_json::from_value(value)?)
}
