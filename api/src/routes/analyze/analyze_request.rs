use serde::Deserialize;

use crate::error_handler::AppError;

/// Request payload for /analyze.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Search queries, analyzed in order. Empty strings are allowed.
    #[serde(default)]
    pub queries: Option<Vec<String>>,
}

impl AnalyzeRequest {
    /// Returns the queries, or `BadRequest` when missing or empty.
    pub fn into_queries(self) -> Result<Vec<String>, AppError> {
        match self.queries {
            Some(queries) if !queries.is_empty() => Ok(queries),
            _ => Err(AppError::BadRequest(
                "`queries` must be a non-empty array of strings".into(),
            )),
        }
    }
}
