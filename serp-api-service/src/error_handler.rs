//! Unified error handling for `serp-api-service`.
//!
//! This module exposes a single top-level error type [`SerpError`] for the whole
//! library and a nested [`ConfigError`] for startup validation. Small helpers for
//! reading environment variables return the unified [`Result<T>`] alias.
//!
//! All messages include the suffix `[SerpApi]` to simplify attribution in logs.

use reqwest::StatusCode;
use thiserror::Error;

/* ------------------------------------------------------------------------- */
/* Public result alias                                                       */
/* ------------------------------------------------------------------------- */

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, SerpError>;

/* ------------------------------------------------------------------------- */
/* Top-level error                                                           */
/* ------------------------------------------------------------------------- */

/// Top-level error for the `serp-api-service` crate.
///
/// A provider call either yields a decoded body or exactly one of these.
/// Callers never receive partial data alongside an error.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SerpError {
    /// Configuration/validation errors (startup).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The provider answered with an explicit `error` field.
    #[error("{0}")]
    Provider(String),

    /// Upstream returned a non-successful HTTP status without an `error` field.
    #[error("[SerpApi] HTTP {status}: {snippet}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: StatusCode,
        /// Short snippet of the response body (trimmed).
        snippet: String,
    },

    /// Request exceeded the configured per-call timeout.
    #[error("[SerpApi] request timed out")]
    Timeout,

    /// Network/transport failure without HTTP status (DNS/connect/reset).
    #[error("[SerpApi] network error: {0}")]
    Network(String),

    /// Response payload could not be decoded as expected.
    #[error("[SerpApi] decode error: {0}")]
    Decode(String),
}

/// Maps transport errors with the request URL stripped; the query string
/// carries the API key.
impl From<reqwest::Error> for SerpError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return SerpError::Timeout;
        }
        if e.is_decode() {
            return SerpError::Decode(e.without_url().to_string());
        }
        SerpError::Network(e.without_url().to_string())
    }
}

impl From<serde_json::Error> for SerpError {
    fn from(e: serde_json::Error) -> Self {
        SerpError::Decode(e.to_string())
    }
}

/* ------------------------------------------------------------------------- */
/* Config errors                                                             */
/* ------------------------------------------------------------------------- */

/// Error enum for environment/config-driven setup.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Required environment variable is missing or empty.
    #[error("[SerpApi] missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A number failed to parse (result count, timeouts).
    #[error("[SerpApi] invalid number in {var}: {reason}")]
    InvalidNumber {
        /// Variable name (e.g., `SEARCH_NUM`).
        var: &'static str,
        /// Human-readable reason (e.g., `expected u32 > 0`).
        reason: &'static str,
    },

    /// Value had the wrong format (e.g., invalid URL, unknown device).
    #[error("[SerpApi] invalid format in {var}: {reason}")]
    InvalidFormat {
        /// Variable name (e.g., `SERPAPI_BASE_URL`).
        var: &'static str,
        /// Explanation (e.g., `must start with http:// or https://`).
        reason: &'static str,
    },
}

/* ------------------------------------------------------------------------- */
/* Env helpers (return unified `Result<T>`)                                  */
/* ------------------------------------------------------------------------- */

/// Reads an optional environment variable, treating empty values as unset.
pub fn env_opt(name: &'static str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses a positive integer from an optional raw value.
///
/// # Errors
/// Returns [`ConfigError::InvalidNumber`] if the value is set but is not a
/// positive number.
pub fn parse_positive<T>(var: &'static str, raw: Option<&str>, default: T) -> Result<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.parse::<T>() {
        Ok(v) if v > T::default() => Ok(v),
        _ => Err(ConfigError::InvalidNumber {
            var,
            reason: "expected a positive integer",
        }
        .into()),
    }
}

/// Parses a boolean flag (`true/false/1/0/yes/no`).
///
/// # Errors
/// Returns [`ConfigError::InvalidFormat`] for any other value.
pub fn parse_flag(var: &'static str, raw: Option<&str>, default: bool) -> Result<bool> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFormat {
            var,
            reason: "expected true/false",
        }
        .into()),
    }
}

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
///
/// # Errors
/// Returns [`ConfigError::InvalidFormat`] when the string does not start with
/// a valid HTTP scheme.
pub fn validate_http_endpoint(var: &'static str, value: &str) -> Result<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidFormat {
            var,
            reason: "must start with http:// or https://",
        }
        .into())
    }
}

/// Cuts a response body down to a short, single-line snippet for error messages.
pub fn make_snippet(body: &str) -> String {
    let line = body.trim().replace(['\n', '\r'], " ");
    if line.chars().count() > 200 {
        let cut: String = line.chars().take(200).collect();
        format!("{cut}…")
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_numbers_fall_back_to_default() {
        assert_eq!(parse_positive::<u32>("SEARCH_NUM", None, 10).unwrap(), 10);
        assert_eq!(parse_positive::<u32>("SEARCH_NUM", Some("20"), 10).unwrap(), 20);
    }

    #[test]
    fn zero_and_garbage_are_rejected() {
        for raw in ["0", "-3", "ten"] {
            let err = parse_positive::<u64>("SERPAPI_TIMEOUT_SECS", Some(raw), 30).unwrap_err();
            assert!(matches!(
                err,
                SerpError::Config(ConfigError::InvalidNumber {
                    var: "SERPAPI_TIMEOUT_SECS",
                    ..
                })
            ));
        }
    }

    #[test]
    fn flags_accept_common_spellings() {
        assert!(parse_flag("SEARCH_NO_CACHE", Some("1"), false).unwrap());
        assert!(!parse_flag("SEARCH_NO_CACHE", Some("FALSE"), true).unwrap());
        assert!(parse_flag("SEARCH_NO_CACHE", None, true).unwrap());
        assert!(parse_flag("SEARCH_NO_CACHE", Some("maybe"), true).is_err());
    }

    #[test]
    fn endpoint_requires_http_scheme() {
        assert!(validate_http_endpoint("SERPAPI_BASE_URL", "https://serpapi.com").is_ok());
        assert!(validate_http_endpoint("SERPAPI_BASE_URL", "serpapi.com").is_err());
    }

    #[test]
    fn snippet_is_single_line_and_bounded() {
        assert_eq!(make_snippet("  a\nb  "), "a b");
        let long = "x".repeat(500);
        assert_eq!(make_snippet(&long).chars().count(), 201);
    }
}
