//! Wire types for the SerpApi JSON responses this service reads.
//!
//! Only the fields the analysis needs are modelled; everything else in the
//! provider payload is ignored by serde. Modelled fields decode leniently:
//! a value of an unexpected type reads as missing instead of failing the
//! whole response.

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Response of the primary `engine=google` search.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchResponse {
    /// Ranked organic results, in provider order.
    #[serde(default, deserialize_with = "lenient")]
    pub organic_results: Vec<OrganicResult>,

    /// AI overview block, absent when Google rendered none.
    #[serde(default, deserialize_with = "lenient")]
    pub ai_overview: Option<RawAiOverview>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OrganicResult {
    #[serde(default, deserialize_with = "lenient")]
    pub link: Option<String>,
}

/// The `ai_overview` object as the provider sends it.
///
/// The same object shows up in several shapes: inline references, a
/// `page_token` for a deferred fetch, an `error`, or none of these.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawAiOverview {
    #[serde(default, deserialize_with = "lenient")]
    pub references: Option<Vec<Reference>>,

    /// Older field name for the references list.
    #[serde(default, deserialize_with = "lenient")]
    pub source_links: Option<Vec<Reference>>,

    /// Token for the `google_ai_overview` engine when content renders async.
    #[serde(default, deserialize_with = "lenient")]
    pub page_token: Option<String>,

    /// Kept raw: the provider sends strings, but flags and objects occur.
    #[serde(default)]
    pub error: Option<Value>,
}

impl RawAiOverview {
    /// References under either field name.
    ///
    /// The first list holding a usable link wins, `references` before
    /// `source_links`; otherwise the first non-empty list.
    pub fn reference_list(&self) -> Option<&[Reference]> {
        let lists = || {
            [self.references.as_deref(), self.source_links.as_deref()]
                .into_iter()
                .flatten()
                .filter(|refs| !refs.is_empty())
        };

        lists()
            .find(|refs| refs.iter().any(|r| r.href().is_some()))
            .or_else(|| lists().next())
    }

    /// The overview's `error`, when it signals one. See [`error_indicator`].
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().and_then(error_indicator)
    }
}

/// One cited source inside an AI overview.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Reference {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub link: Option<String>,
}

impl Reference {
    /// The link, unless missing or blank.
    pub fn href(&self) -> Option<&str> {
        self.link.as_deref().filter(|l| !l.trim().is_empty())
    }
}

/// Response of the follow-up `engine=google_ai_overview` fetch.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AiOverviewPageResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub ai_overview: Option<RawAiOverview>,
}

/// Reads a provider `error` value.
///
/// `null`, `false` and blank strings mean "no error". A string is the
/// message itself; any other value is reported as its JSON text.
pub fn error_indicator(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}
