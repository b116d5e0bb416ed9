//! The seam between the analysis pipeline and the search provider.
//!
//! Static dispatch only: consumers are generic over [`SearchProvider`], and
//! the returned futures are `Send` so handlers can run them on the
//! multi-threaded runtime.

use std::future::Future;

use crate::{
    config::search_params::SearchParams,
    error_handler::Result,
    types::{AiOverviewPageResponse, SearchResponse},
};

/// Single-shot provider calls. No retries happen behind this trait.
pub trait SearchProvider: Send + Sync {
    /// Runs the primary search for `query`.
    ///
    /// A provider-reported `error` must come back as `Err`, never as a
    /// partially filled response.
    fn search(
        &self,
        query: &str,
        params: &SearchParams,
    ) -> impl Future<Output = Result<SearchResponse>> + Send;

    /// Fetches asynchronously rendered AI overview content by page token.
    fn fetch_ai_overview_page(
        &self,
        page_token: &str,
    ) -> impl Future<Output = Result<AiOverviewPageResponse>> + Send;
}
