//! POST /analyze — compares AI overview citations with top organic results.

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use overview_engine::QueryResult;
use serp_api_service::SearchProvider;
use tracing::{info, instrument};

use crate::{
    core::app_state::AppState,
    error_handler::AppResult,
    routes::analyze::analyze_request::AnalyzeRequest,
};

/// Handler: POST /analyze
///
/// Responds with one result per input query, same order. Per-query failures
/// are reported inside the array; only invalid input fails the request.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:3001/analyze \
///   -H 'content-type: application/json' \
///   -d '{"queries":["best running shoes","how to learn rust"]}'
/// ```
#[instrument(name = "analyze_route", skip_all)]
pub async fn analyze<P>(
    State(state): State<Arc<AppState<P>>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> AppResult<Json<Vec<QueryResult>>>
where
    P: SearchProvider + 'static,
{
    let Json(body) = payload?;
    let queries = body.into_queries()?;
    info!(count = queries.len(), "analyze batch received");

    let results = state.analyzer.process(&queries).await;

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    info!(count = results.len(), failed, "analyze batch finished");

    Ok(Json(results))
}
