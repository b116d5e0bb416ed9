//! Query analysis pipeline: for each search query, compare the domains cited
//! by Google's AI overview with the top organic results.
//!
//! Flow per query: primary search → [`resolver::resolve`] (may fetch a
//! deferred overview) → [`scorer::similarity_score`] → [`model::QueryResult`].
//! [`processor::OverviewAnalyzer::process`] drives a whole batch.

pub mod domain;
pub mod errors;
pub mod model;
pub mod processor;
pub mod resolver;
pub mod scorer;

#[cfg(test)]
mod test_support;

pub use domain::normalize_domain;
pub use errors::{AnalyzeError, AnalyzeResult};
pub use model::{AiLink, AiOverviewStatus, QueryResult};
pub use processor::OverviewAnalyzer;
pub use resolver::Resolution;
