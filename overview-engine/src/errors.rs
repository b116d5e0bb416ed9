//! Crate-wide error type for overview-engine.

use serp_api_service::SerpError;
use thiserror::Error;

/// Convenient alias for crate-wide results.
pub type AnalyzeResult<T> = Result<T, AnalyzeError>;

/// Failure of one query's analysis.
///
/// Only the primary search can fail a query. AI overview sub-fetch failures
/// are absorbed by the resolver and show up as a status instead.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// Primary search failed: provider-reported error, transport or decode.
    #[error(transparent)]
    Provider(#[from] SerpError),
}
