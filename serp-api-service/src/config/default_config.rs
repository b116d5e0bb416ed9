//! SerpApi config loaded strictly from environment variables.
//!
//! # Environment variables
//!
//! - `SERPAPI_KEY`          = provider credential (mandatory)
//! - `SERPAPI_BASE_URL`     = provider base URL (default `https://serpapi.com`)
//! - `SERPAPI_TIMEOUT_SECS` = per-call timeout (default `30`)
//! - `SEARCH_HL`            = result language (default `en`)
//! - `SEARCH_GL`            = result geo/locale (default `in`)
//! - `SEARCH_DEVICE`        = `desktop` | `mobile` | `tablet` (default `desktop`)
//! - `SEARCH_NUM`           = organic result count (default `10`)
//! - `SEARCH_NO_CACHE`      = bypass provider cache (default `true`)

use std::time::Duration;

use crate::{
    config::{
        search_params::{Device, SearchParams},
        serp_config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, SerpConfig},
    },
    error_handler::{
        ConfigError, Result, SerpError, env_opt, parse_flag, parse_positive,
        validate_http_endpoint,
    },
};

/// Builds a [`SerpConfig`] from the process environment.
///
/// # Errors
///
/// - [`ConfigError::MissingVar`] if `SERPAPI_KEY` is absent or empty
/// - [`ConfigError::InvalidNumber`] / [`ConfigError::InvalidFormat`] for
///   malformed optional values
pub fn config_from_env() -> Result<SerpConfig> {
    config_from(env_opt)
}

/// Builds a [`SerpConfig`] from an arbitrary variable lookup.
pub fn config_from<F>(lookup: F) -> Result<SerpConfig>
where
    F: Fn(&'static str) -> Option<String>,
{
    let api_key = lookup("SERPAPI_KEY").ok_or(ConfigError::MissingVar("SERPAPI_KEY"))?;

    let base_url = lookup("SERPAPI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
    validate_http_endpoint("SERPAPI_BASE_URL", &base_url)?;

    let timeout_secs = parse_positive(
        "SERPAPI_TIMEOUT_SECS",
        lookup("SERPAPI_TIMEOUT_SECS").as_deref(),
        DEFAULT_TIMEOUT_SECS,
    )?;

    let defaults = SearchParams::default();
    let device = match lookup("SEARCH_DEVICE") {
        Some(raw) => raw.parse::<Device>().map_err(SerpError::from)?,
        None => defaults.device,
    };

    let search = SearchParams {
        hl: lookup("SEARCH_HL").unwrap_or(defaults.hl),
        gl: lookup("SEARCH_GL").unwrap_or(defaults.gl),
        device,
        num: parse_positive("SEARCH_NUM", lookup("SEARCH_NUM").as_deref(), defaults.num)?,
        no_cache: parse_flag(
            "SEARCH_NO_CACHE",
            lookup("SEARCH_NO_CACHE").as_deref(),
            defaults.no_cache,
        )?,
    };

    Ok(SerpConfig {
        api_key,
        base_url: base_url.trim_end_matches('/').to_string(),
        timeout: Duration::from_secs(timeout_secs),
        search,
    })
}
