use serde::{Deserialize, Serialize};

/// How the AI overview for one query was (or was not) obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AiOverviewStatus {
    /// No `ai_overview` in the search response.
    #[default]
    NotPresent,
    /// References delivered inline with the search response.
    Embedded,
    /// References delivered by the follow-up page-token fetch.
    Asynchronous,
    /// The follow-up fetch failed or reported an error.
    ErrorFetchingAsync,
    /// The follow-up fetch succeeded but carried no usable references.
    AsyncNoLinks,
    /// The overview object itself carried an `error`.
    ErrorReportedByProvider,
    /// The overview object had no references, token or error.
    PresentNoLinksOrToken,
    /// The primary search for this query failed.
    ProcessingError,
}

/// One cited link in an AI overview, in provider order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiLink {
    pub text: String,
    pub href: String,
}

/// Analysis outcome for a single input query.
///
/// `error` is set only when the query itself failed; then every other field
/// keeps its zero value apart from `ai_status = ProcessingError`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryResult {
    pub query: String,
    pub similarity_score: u8,
    pub has_ai: bool,
    pub ai_status: AiOverviewStatus,
    pub top_3_organic: Vec<String>,
    pub ai_overview_links: Vec<AiLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryResult {
    /// Zero-valued result for `query`.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Result for a query whose primary search failed.
    pub fn failed(query: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            ai_status: AiOverviewStatus::ProcessingError,
            error: Some(message.into()),
            ..Self::new(query)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let mut result = QueryResult::new("best laptops");
        result.ai_status = AiOverviewStatus::Embedded;
        result.has_ai = true;
        result.ai_overview_links.push(AiLink {
            text: "A".into(),
            href: "https://a.com".into(),
        });

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "query": "best laptops",
                "similarity_score": 0,
                "has_ai": true,
                "ai_status": "Embedded",
                "top_3_organic": [],
                "ai_overview_links": [{ "text": "A", "href": "https://a.com" }]
            })
        );
    }

    #[test]
    fn failed_result_keeps_zero_values() {
        let result = QueryResult::failed("q", "Invalid API key.");
        assert_eq!(result.ai_status, AiOverviewStatus::ProcessingError);
        assert_eq!(result.similarity_score, 0);
        assert!(!result.has_ai);
        assert!(result.top_3_organic.is_empty() && result.ai_overview_links.is_empty());
        assert_eq!(
            serde_json::to_value(&result).unwrap()["error"],
            json!("Invalid API key.")
        );
    }
}
