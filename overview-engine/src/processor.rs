//! Sequential batch analysis.

use serp_api_service::{SearchParams, SearchProvider, types::SearchResponse};
use tracing::{info, instrument, warn};

use crate::{
    errors::AnalyzeResult,
    model::QueryResult,
    resolver::resolve,
    scorer::{TOP_ORGANIC, similarity_score},
};

/// Runs the per-query pipeline against a search provider.
///
/// Queries are handled one at a time; each one, including any AI overview
/// page fetch, completes before the next starts.
pub struct OverviewAnalyzer<P> {
    provider: P,
    params: SearchParams,
}

impl<P> OverviewAnalyzer<P>
where
    P: SearchProvider,
{
    pub fn new(provider: P, params: SearchParams) -> Self {
        Self { provider, params }
    }

    /// Analyzes every query, preserving input length and order.
    ///
    /// A failing query yields a result carrying `error` and
    /// `ProcessingError`; the batch always continues.
    pub async fn process<S>(&self, queries: &[S]) -> Vec<QueryResult>
    where
        S: AsRef<str> + Sync,
    {
        let mut results = Vec::with_capacity(queries.len());

        for (idx, query) in queries.iter().enumerate() {
            let query = query.as_ref();
            info!(idx, query, "analyzing query");

            let result = match self.analyze_query(query).await {
                Ok(result) => result,
                Err(err) => {
                    warn!(idx, query, error = %err, "query failed");
                    QueryResult::failed(query, err.to_string())
                }
            };

            info!(
                idx,
                status = ?result.ai_status,
                score = result.similarity_score,
                "query done"
            );
            results.push(result);
        }

        results
    }

    /// Full pipeline for one query. Only the primary search can fail it.
    #[instrument(skip(self))]
    pub async fn analyze_query(&self, query: &str) -> AnalyzeResult<QueryResult> {
        let response = self.provider.search(query, &self.params).await?;

        let mut result = QueryResult::new(query);
        result.top_3_organic = top_organic(&response);

        let resolution = resolve(&self.provider, &response).await;
        result.ai_status = resolution.status;
        result.has_ai = resolution.has_ai;
        result.ai_overview_links = resolution.links;

        let hrefs: Vec<&str> = result
            .ai_overview_links
            .iter()
            .map(|l| l.href.as_str())
            .collect();
        result.similarity_score = similarity_score(&result.top_3_organic, &hrefs);

        Ok(result)
    }
}

/// First organic links with a non-empty `link`, in rank order.
pub fn top_organic(response: &SearchResponse) -> Vec<String> {
    response
        .organic_results
        .iter()
        .filter_map(|r| r.link.as_deref())
        .filter(|link| !link.trim().is_empty())
        .take(TOP_ORGANIC)
        .map(str::to_string)
        .collect()
}
